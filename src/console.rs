//! A line-oriented stand-in for the signup form, used by the binary.

use std::cell::RefCell;
use std::io;
use std::io::BufRead;
use std::io::Write;

use crate::surface::{Field, FormSurface, MessageKind};
use crate::workflow::SignupWorkflow;

pub struct ConsoleSurface {
    name: RefCell<String>,
    email: RefCell<String>,
}

impl ConsoleSurface {
    pub fn new(name: String, email: String) -> Self {
        Self {
            name: RefCell::new(name),
            email: RefCell::new(email),
        }
    }
}

impl FormSurface for ConsoleSurface {
    fn name(&self) -> String {
        self.name.borrow().clone()
    }

    fn email(&self) -> String {
        self.email.borrow().clone()
    }

    fn focus(&self, field: Field) {
        // a prompt has no cursor to move; name the field to fix instead
        let label = match field {
            Field::Name => "name",
            Field::Email => "email",
        };
        println!("(check the {} and try again)", label);
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            println!("Submitting...");
        }
    }

    fn show_message(&self, text: &str, kind: MessageKind) {
        match kind {
            MessageKind::Success => println!("[ok] {}", text),
            MessageKind::Error => println!("[error] {}", text),
        }
    }

    fn clear_message(&self) {
        // messages scroll away on their own in a terminal
    }

    fn clear_fields(&self) {
        self.name.borrow_mut().clear();
        self.email.borrow_mut().clear();
    }
}

/// Prompt for signups until stdin closes.
pub async fn run(workflow: &SignupWorkflow) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Name (optional): ");
        io::stdout().flush()?;
        let name = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        print!("Email: ");
        io::stdout().flush()?;
        let email = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let surface = ConsoleSurface::new(name, email);
        workflow.submit(&surface).await;
        println!();
    }
    Ok(())
}
