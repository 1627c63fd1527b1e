//! Buffered terminal output.
//!
//! Commands collect their whole output in an [`OutputPage`] and write it in
//! one go after every provider call has succeeded, so a failing command never
//! leaves half a page on the terminal.

use super::colors;
use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};

/// Visual treatment of one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Text,
    /// Underlined title, e.g. the round label.
    Title,
    /// Column header of a table.
    Header,
    /// Lines of the favourite team's fixture.
    Favourite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub text: String,
    pub style: LineStyle,
}

#[derive(Debug, Clone, Default)]
pub struct OutputPage {
    lines: Vec<PageLine>,
    plain: bool,
}

impl OutputPage {
    /// Creates an empty page. A plain page writes text without any styling.
    pub fn new(plain: bool) -> Self {
        OutputPage {
            lines: Vec::new(),
            plain,
        }
    }

    pub fn add_line(&mut self, text: impl Into<String>, style: LineStyle) {
        self.lines.push(PageLine {
            text: text.into(),
            style,
        });
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.add_line(text, LineStyle::Text);
    }

    /// Adds every line of a multi-line text unit with the same style.
    pub fn add_block<I, S>(&mut self, lines: I, style: LineStyle)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.add_line(line, style);
        }
    }

    pub fn add_blank(&mut self) {
        self.add_text("");
    }

    pub fn lines(&self) -> &[PageLine] {
        &self.lines
    }

    /// The page content without styling.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.text);
            text.push('\n');
        }
        text
    }

    /// Queues the whole page on `out` and flushes once.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            if self.plain || line.text.is_empty() {
                queue!(out, Print(&line.text), Print("\n"))?;
                continue;
            }

            match line.style {
                LineStyle::Text => {
                    queue!(out, SetForegroundColor(colors::text_fg()), Print(&line.text))?;
                }
                LineStyle::Title => {
                    queue!(
                        out,
                        SetForegroundColor(colors::title_fg()),
                        SetAttribute(Attribute::Underlined),
                        Print(&line.text),
                        SetAttribute(Attribute::NoUnderline)
                    )?;
                }
                LineStyle::Header => {
                    queue!(
                        out,
                        SetForegroundColor(colors::header_fg()),
                        SetAttribute(Attribute::Bold),
                        Print(&line.text),
                        SetAttribute(Attribute::NormalIntensity)
                    )?;
                }
                LineStyle::Favourite => {
                    queue!(out, SetForegroundColor(colors::favourite_fg()), Print(&line.text))?;
                }
            }
            queue!(out, ResetColor, Print("\n"))?;
        }
        out.flush()
    }
}
