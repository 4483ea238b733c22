//! Colored output sink
//!
//! Color changes are queued as crossterm commands on the wrapped writer and
//! only flushed with the text they color, so the writer works unchanged on
//! stdout, a file, or an in-memory buffer in tests. With color disabled no
//! escape sequences are written at all.

use super::palette::Palette;
use crate::classifier::Category;
use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use std::io::{self, Write};
use std::path::Path;

/// Writes classified lines in their category color.
pub struct ColorWriter<W: Write> {
    out: W,
    palette: Palette,
    colored: bool,
    reset_to_other: bool,
}

impl<W: Write> ColorWriter<W> {
    pub fn new(out: W, palette: Palette, colored: bool) -> Self {
        Self {
            out,
            palette,
            colored,
            reset_to_other: true,
        }
    }

    /// Whether to switch to the `other` color after every line.
    pub fn reset_to_other(mut self, enabled: bool) -> Self {
        self.reset_to_other = enabled;
        self
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        if self.colored {
            queue!(self.out, SetForegroundColor(color))?;
        }
        Ok(())
    }

    fn after_line(&mut self) -> io::Result<()> {
        if self.reset_to_other {
            self.set_color(self.palette.color(Category::Other))?;
        }
        Ok(())
    }

    fn segment(&mut self, color: Color, text: &str) -> io::Result<()> {
        self.set_color(color)?;
        self.out.write_all(text.as_bytes())
    }

    /// Emit one classified line followed by a newline.
    pub fn write_line(&mut self, line: &[u8], category: Category) -> io::Result<()> {
        self.set_color(self.palette.color(category))?;
        self.out.write_all(line)?;
        self.out.write_all(b"\n")?;
        self.after_line()
    }

    /// Emit an unclassified blank line.
    pub fn write_blank(&mut self) -> io::Result<()> {
        self.after_line()?;
        self.out.write_all(b"\n")
    }

    /// `ATGLogColorizer vX` startup banner.
    pub fn banner(&mut self, version: &str) -> io::Result<()> {
        let palette = self.palette;
        self.segment(palette.color(Category::Info), "ATG")?;
        self.segment(palette.color(Category::Warning), "Log")?;
        self.segment(palette.color(Category::Other), "Colorizer")?;
        self.segment(palette.intro, &format!(" v{}\n", version))?;
        self.after_line()?;
        self.out.flush()
    }

    /// Supported servers, the category colors and sample usage.
    pub fn legend(&mut self, program: &str) -> io::Result<()> {
        let palette = self.palette;
        self.segment(
            palette.intro,
            "\nColor-codes application server output. Output from JBoss, WebLogic, \
             WebSphere, DAS, or anything using log4j is recognized.\n\
             Lines are colored as follows:\n",
        )?;
        for (i, category) in Category::ALL.iter().enumerate() {
            if i > 0 {
                self.segment(palette.intro, " - ")?;
            }
            self.segment(palette.color(*category), category.label())?;
        }
        self.segment(
            palette.intro,
            &format!(
                "\n\nSample usage:\n   [appserver startup script] | {program}\n\
                 \x20                  or\n   {program} [path to log file]\n\n"
            ),
        )?;
        self.finish()
    }

    /// `Opening file <path>` notice.
    pub fn opening(&mut self, path: &Path) -> io::Result<()> {
        let intro = self.palette.intro;
        self.segment(intro, &format!("Opening file {}\n", path.display()))?;
        self.after_line()?;
        self.out.flush()
    }

    /// Report an input file that could not be opened.
    pub fn unreadable(&mut self, path: &Path) -> io::Result<()> {
        let error = self.palette.color(Category::Error);
        self.segment(error, &format!("\n\nFile '{}' couldn't be read\n", path.display()))?;
        self.finish()
    }

    /// Ctrl+C notice.
    pub fn interrupted(&mut self) -> io::Result<()> {
        let exiting = self.palette.exiting;
        self.segment(exiting, "\nCtrl + C detected\nExiting now...\n\n")?;
        self.finish()
    }

    /// Restore the terminal's own color and flush.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.colored {
            queue!(self.out, ResetColor)?;
        }
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
