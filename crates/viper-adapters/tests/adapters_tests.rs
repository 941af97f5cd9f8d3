//! Integration tests wiring the profile module with real adapters.

use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use viper_adapters::{ConsoleDisplay, ConsoleNavigator, LineFormat, MemoryDisplay, MemoryNavigator};
use viper_core::prelude::*;

/// Writer whose buffer stays readable after the adapter is moved away.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sample_scenario_console_output() {
    let buffer = SharedBuffer::default();
    let module = ProfileModule::assemble(
        Entity::default(),
        ConsoleNavigator::with_writer(buffer.clone(), LineFormat::Plain),
        ConsoleDisplay::with_writer(buffer.clone(), LineFormat::Plain),
    )
    .unwrap();

    module.view().come_on_screen();
    module.view().proceed();

    assert_eq!(
        buffer.contents(),
        "Hello, Taylor Swift, and welcome to your profile!\n\
         I am the Router outreach and the name I got is Taylor Swift\n"
    );
}

#[test]
fn test_json_scenario_output() {
    let buffer = SharedBuffer::default();
    let module = ProfileModule::assemble(
        Entity::new("Ada"),
        ConsoleNavigator::with_writer(buffer.clone(), LineFormat::Json),
        ConsoleDisplay::with_writer(buffer.clone(), LineFormat::Json),
    )
    .unwrap();

    module.run_scenario();

    let lines: Vec<serde_json::Value> = buffer
        .contents()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["kind"], "display");
    assert_eq!(lines[0]["text"], "Hello, Ada, and welcome to your profile!");
    assert_eq!(lines[1]["kind"], "navigation");
    assert_eq!(lines[1]["text"], "Ada");
}

#[test]
fn test_memory_adapters_record_each_call() {
    let display = MemoryDisplay::new();
    let navigator = MemoryNavigator::new();
    let module =
        ProfileModule::assemble(Entity::default(), navigator.clone(), display.clone()).unwrap();

    module.run_steps(&[Step::Arrive, Step::Arrive, Step::Continue]);

    assert_eq!(display.len(), 2);
    assert_eq!(
        display.messages()[1],
        "Hello, Taylor Swift, and welcome to your profile!"
    );
    assert_eq!(navigator.destinations(), vec!["Taylor Swift"]);
}

#[test]
fn test_nothing_is_recorded_after_module_is_dropped() {
    let display = MemoryDisplay::new();
    let navigator = MemoryNavigator::new();
    let module =
        ProfileModule::assemble(Entity::default(), navigator.clone(), display.clone()).unwrap();
    let presenter = module.presenter().unwrap();

    drop(module);
    presenter.welcome("Taylor Swift");

    assert!(display.is_empty());
    assert!(navigator.is_empty());
}
