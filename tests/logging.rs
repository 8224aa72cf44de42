use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use akai_tree::RBTree;
use simplelog::{Config, LevelFilter, WriteLogger};

/// A `Write` sink that keeps everything the logger writes.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// The global logger can be installed once per process, so this file holds a single test.
#[test]
fn rebalancing_emits_trace_events() {
    let captured = CapturedLog::default();
    WriteLogger::init(LevelFilter::Trace, Config::default(), captured.clone()).unwrap();

    let mut tree: RBTree<i32> = (0..64).collect();
    for key in (0..64).step_by(2) {
        assert!(tree.delete(&key));
    }
    assert!(!tree.insert(1));
    assert_eq!(tree.len(), 32);
    assert!(tree.validate().is_ok());

    let output = captured.contents();
    assert!(output.contains("rotate Left around"), "no left rotation logged:\n{output}");
    assert!(output.contains("insert fixup: red uncle"), "no insert recoloring logged:\n{output}");
    assert!(output.contains("delete fixup:"), "no delete fixup logged:\n{output}");
    assert!(output.contains("key already present"), "duplicate insert not logged:\n{output}");
}
