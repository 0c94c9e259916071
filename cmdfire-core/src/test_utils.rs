//! Test helpers shared by the unit tests

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::dispatcher::Dispatcher;

/// In-memory output sink that stays readable after being handed to a
/// [`Dispatcher`]
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    /// Drain the buffer and return what was in it
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Call log filled by [`recording_handler`]
pub type Calls = Rc<RefCell<Vec<Vec<String>>>>;

/// Handler that records every argument list it receives
pub fn recording_handler() -> (
    impl Fn(&mut Dispatcher, &[String]) -> anyhow::Result<()> + 'static,
    Calls,
) {
    let calls = Calls::default();
    let log = Rc::clone(&calls);
    let handler = move |_ctx: &mut Dispatcher, args: &[String]| -> anyhow::Result<()> {
        log.borrow_mut().push(args.to_vec());
        Ok(())
    };
    (handler, calls)
}
