//! Interactive playlist selection
//!
//! The export pipeline never talks to the terminal itself; it is handed a
//! `PlaylistChooser` and calls it only when no filter was supplied.

use crate::itunes::ancestor_depth;
use crate::model::{Library, PlaylistDescriptor};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Number of spaces per nesting level
const TAB_SIZE: usize = 4;

/// Width of the table used to print playlists
const TABLE_WIDTH: usize = 50;

/// Decides which playlists to export when the caller did not specify any
pub trait PlaylistChooser {
    fn choose<'a>(&self, library: &'a Library) -> Result<Vec<&'a PlaylistDescriptor>>;
}

/// Selects every playlist in the library
pub struct SelectAll;

impl PlaylistChooser for SelectAll {
    fn choose<'a>(&self, library: &'a Library) -> Result<Vec<&'a PlaylistDescriptor>> {
        Ok(library.playlists().iter().collect())
    }
}

/// Asks y/n per playlist on the terminal, indented by folder depth,
/// looping until the user confirms the selection
pub struct ConsoleChooser;

impl ConsoleChooser {
    pub fn new() -> Self {
        Self
    }

    fn prompt(&self, text: &str) -> Result<String> {
        print!("{}", text);
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("Failed to read from stdin")?;
        Ok(answer.trim().to_string())
    }
}

impl Default for ConsoleChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistChooser for ConsoleChooser {
    fn choose<'a>(&self, library: &'a Library) -> Result<Vec<&'a PlaylistDescriptor>> {
        println!(
            "You have not specified any playlists to export! \
             The playlists available will now be printed, \
             please enter y to export the playlist or n to skip it."
        );

        loop {
            let mut chosen: Vec<&PlaylistDescriptor> = Vec::new();

            for descriptor in library.playlists() {
                let depth = match ancestor_depth(descriptor, library.playlists()) {
                    Ok(depth) => depth,
                    Err(err) => {
                        // Display falls back to root level; the playlist
                        // itself is still selectable and exportable
                        log::warn!("{}", err);
                        0
                    }
                };

                let row = format_row(descriptor, depth);
                if self.prompt(&row)? == "y" {
                    chosen.push(descriptor);
                }
            }

            let names: Vec<&str> = chosen.iter().map(|d| d.name.as_str()).collect();
            let report = self.prompt(&format!(
                "Playlists to be exported are: {}\n\
                 To continue, type \"y\", to choose a new set of playlists, type \"n\" ",
                names.join(", ")
            ))?;

            if report != "n" {
                return Ok(chosen);
            }
        }
    }
}

/// One selectable table row: indented name, padding, kind label and prompt
fn format_row(descriptor: &PlaylistDescriptor, depth: usize) -> String {
    let start = format!("{}{}", " ".repeat(TAB_SIZE * depth), descriptor.name);
    let end = format!(" <{}> [y/n]? ", descriptor.kind_label());
    let filler = TABLE_WIDTH.saturating_sub(start.len() + end.len());
    format!("{}{}{}", start, " ".repeat(filler), end)
}
