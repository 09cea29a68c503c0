use calc::mach::Memory;
use std::cell::RefCell;
use std::rc::Rc;

/// A store whose prompt channel always answers `reply` and counts how
/// many times it was asked.
pub fn counting_store(reply: f64) -> (Memory, Rc<RefCell<usize>>) {
    let prompts = Rc::new(RefCell::new(0));
    let counter = prompts.clone();
    let memory = Memory::new(move |_| {
        *counter.borrow_mut() += 1;
        reply
    });
    (memory, prompts)
}
