//! # Interactive Menu
//!
//! A line-oriented console loop over a [`Library`]. The loop reads from any
//! `BufRead` and writes to any `Write`, so the binary drives it with stdin and
//! stdout while tests drive it with in-memory buffers.
//!
//! Input is taken line by line with only the line terminator stripped. End of
//! input at any prompt ends the session normally. An unreadable menu choice
//! shows the menu again; an unreadable year aborts the current action.

use crate::error::Result;
use crate::library::Library;
use crate::output::{emoji, render_book, render_books, render_members, OutputConfig};
use crate::record::{Book, Member};
use std::io::{BufRead, Write};

const MENU: &[(u32, &str)] = &[
    (1, "Add book"),
    (2, "List books"),
    (3, "Find book by title"),
    (4, "Remove book"),
    (5, "Update book"),
    (6, "Swap first two books"),
    (7, "Register member"),
    (8, "List members"),
    (9, "Update member"),
    (10, "Remove member and their loans"),
    (11, "Borrow book"),
    (12, "Return book"),
    (13, "View borrowed books"),
    (0, "Quit"),
];

/// Whether the session goes on after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Interactive session over a library
pub struct Menu<R, W> {
    library: Library,
    input: R,
    output: W,
    out: OutputConfig,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(library: Library, input: R, output: W, out: OutputConfig) -> Self {
        Self {
            library,
            input,
            output,
            out,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let Ok(choice) = line.trim().parse::<u32>() else {
                continue;
            };
            if self.dispatch(choice)? == Flow::Stop {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// The library as left by the session
    pub fn into_library(self) -> Library {
        self.library
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{} Library Menu {}",
            emoji(&self.out, "📚", "---"),
            emoji(&self.out, "📚", "---")
        )?;
        for (key, label) in MENU {
            writeln!(self.output, "{}) {}", key, label)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: u32) -> Result<Flow> {
        match choice {
            1 => self.handle_add_book(),
            2 => self.handle_list_books(),
            3 => self.handle_find_book(),
            4 => self.handle_remove_book(),
            5 => self.handle_update_book(),
            6 => self.handle_swap(),
            7 => self.handle_register_member(),
            8 => self.handle_list_members(),
            9 => self.handle_update_member(),
            10 => self.handle_remove_member(),
            11 => self.handle_borrow(),
            12 => self.handle_return(),
            13 => self.handle_view_borrowed(),
            0 => Ok(Flow::Stop),
            _ => Ok(Flow::Continue),
        }
    }

    /// Read one line without its terminator; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn say(&mut self, message: &str) -> Result<Flow> {
        writeln!(self.output, "{}", message)?;
        Ok(Flow::Continue)
    }

    fn handle_add_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(year) = self.prompt("Year: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(year) = parse_year(&year) else {
            return self.say("Invalid year.");
        };

        let book = Book {
            title,
            author,
            year,
        };
        let added = self.library.add_book(book).map(|_| ());
        match added {
            Ok(()) => self.say("Added."),
            Err(e) => {
                let message = format!("Add failed: {}", e.error());
                self.say(&message)
            }
        }
    }

    fn handle_list_books(&mut self) -> Result<Flow> {
        if self.library.catalog().is_empty() {
            return self.say("No books.");
        }
        let listing = render_books(&self.out, self.library.catalog().books());
        write!(self.output, "{}", listing)?;
        Ok(Flow::Continue)
    }

    fn handle_find_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Find Title: ")? else {
            return Ok(Flow::Stop);
        };
        let line = self
            .library
            .catalog()
            .find_book(&title)
            .map(|book| render_book(&self.out, book));
        match line {
            Some(line) => self.say(&line),
            None => self.say("Not found."),
        }
    }

    fn handle_remove_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Remove Title: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(author) = self.prompt("Remove Author: ")? else {
            return Ok(Flow::Stop);
        };
        if self
            .library
            .catalog_mut()
            .remove_book(&Book::new(title, author))
        {
            self.say("Removed.")
        } else {
            self.say("Not found.")
        }
    }

    fn handle_update_book(&mut self) -> Result<Flow> {
        let Some(original) = self.prompt("Original Title: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(title) = self.prompt("New Title: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(author) = self.prompt("New Author: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(year) = self.prompt("New Year: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(year) = parse_year(&year) else {
            return self.say("Invalid year.");
        };

        let updated = Book {
            title,
            author,
            year,
        };
        if self.library.catalog_mut().update_book(&original, &updated) {
            self.say("Updated.")
        } else {
            self.say("Not found.")
        }
    }

    fn handle_swap(&mut self) -> Result<Flow> {
        if self.library.catalog().len() < 2 {
            return self.say("Need at least 2 books.");
        }
        self.library.catalog_mut().swap_books(0, 1);
        self.say("Swapped.")
    }

    fn handle_register_member(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(member_id) = self.prompt("Member ID: ")? else {
            return Ok(Flow::Stop);
        };
        let registered = self
            .library
            .register_member(Member::new(name, member_id))
            .map(|_| ());
        match registered {
            Ok(()) => self.say("Registered."),
            Err(e) => {
                let message = format!("Registration failed: {}", e.error());
                self.say(&message)
            }
        }
    }

    fn handle_list_members(&mut self) -> Result<Flow> {
        if self.library.registry().is_empty() {
            return self.say("No members.");
        }
        let listing = render_members(&self.out, self.library.registry().members());
        write!(self.output, "{}", listing)?;
        Ok(Flow::Continue)
    }

    fn handle_update_member(&mut self) -> Result<Flow> {
        let Some(member_id) = self.prompt("Member ID: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(name) = self.prompt("New Name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(new_id) = self.prompt("New Member ID: ")? else {
            return Ok(Flow::Stop);
        };
        if self
            .library
            .registry_mut()
            .update_member(&member_id, &Member::new(name, new_id))
        {
            self.say("Updated.")
        } else {
            self.say("Not found.")
        }
    }

    fn handle_remove_member(&mut self) -> Result<Flow> {
        let Some(member_id) = self.prompt("Member ID: ")? else {
            return Ok(Flow::Stop);
        };
        // Identity is the id alone, so the name does not matter here
        let member = Member::new("", member_id);
        if self.library.remove_member_and_books(&member) {
            self.say("Removed.")
        } else {
            self.say("Not found.")
        }
    }

    fn handle_borrow(&mut self) -> Result<Flow> {
        let Some(member_id) = self.prompt("Member ID: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Stop);
        };

        let Some(member) = self.library.registry().find_member(&member_id).cloned() else {
            return self.say("Member not found.");
        };
        let Some(book) = self.library.catalog().find_book(&title).cloned() else {
            return self.say("Book not found.");
        };
        self.library.borrow_book(&member, book);
        self.say("Borrowed.")
    }

    fn handle_return(&mut self) -> Result<Flow> {
        let Some(member_id) = self.prompt("Member ID: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(Flow::Stop);
        };

        let member = Member::new("", member_id);
        if self.library.return_book(&member, &Book::new(title, author)) {
            self.say("Returned.")
        } else {
            self.say("Not borrowed.")
        }
    }

    fn handle_view_borrowed(&mut self) -> Result<Flow> {
        let Some(member_id) = self.prompt("Member ID: ")? else {
            return Ok(Flow::Stop);
        };
        let borrowed = self.library.view_borrowed(&Member::new("", member_id));
        if borrowed.is_empty() {
            return self.say("No borrowed books.");
        }
        let listing = render_books(&self.out, &borrowed);
        write!(self.output, "{}", listing)?;
        Ok(Flow::Continue)
    }
}

/// Blank means no year; anything else must be an integer.
fn parse_year(input: &str) -> Option<Option<i32>> {
    let input = input.trim();
    if input.is_empty() {
        return Some(None);
    }
    input.parse().ok().map(Some)
}
