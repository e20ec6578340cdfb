//! The operator console: candidate lists and prompts over stdin/stdout.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use film_shelf_core::{Operator, QueryState, ResultPage};

/// Answers disambiguation prompts from a line-oriented reader.
///
/// End of input (or a read error) reads as "no answer", which the loop
/// treats as a skip.
pub(crate) struct ConsoleOperator<R, W> {
    input: R,
    output: W,
    next_page: String,
}

impl ConsoleOperator<io::StdinLock<'static>, io::Stdout> {
    pub(crate) fn stdio(next_page: &str) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), next_page)
    }
}

impl<R: BufRead, W: Write> ConsoleOperator<R, W> {
    pub(crate) fn new(input: R, output: W, next_page: &str) -> Self {
        Self {
            input,
            output,
            next_page: next_page.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    fn show_page(&mut self, state: &QueryState, page: &ResultPage) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Choose entry for \"{}\"",
            state.filename().if_supports_color(Stdout, |t| t.bold()),
        )?;
        writeln!(self.output, "  0: Skip this file")?;
        for (i, candidate) in page.candidates.iter().enumerate() {
            writeln!(self.output, "  {}: {}", i + 1, candidate)?;
        }
        writeln!(self.output, "  {}: Next page of results", self.next_page)?;
        if let Some(total) = page.total_results {
            writeln!(
                self.output,
                "  {}",
                format!("(page {}, {} matches for \"{}\")", state.page(), total, state.search())
                    .if_supports_color(Stdout, |t| t.dimmed()),
            )?;
        }
        writeln!(self.output)?;
        write!(self.output, "Choose one, or enter new search terms: ")?;
        self.output.flush()
    }

    fn read_answer(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::debug!("Failed to read answer: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Operator for ConsoleOperator<R, W> {
    fn choose(&mut self, state: &QueryState, page: &ResultPage) -> Option<String> {
        if let Err(e) = self.show_page(state, page) {
            log::warn!("Failed to show results: {}", e);
            return None;
        }
        self.read_answer()
    }

    fn revise_search(&mut self, state: &QueryState, message: &str) -> Option<String> {
        let shown = write!(
            self.output,
            "Error for \"{}\": {} Enter new search terms, or leave blank to skip: ",
            state.filename(),
            message.if_supports_color(Stdout, |t| t.yellow()),
        )
        .and_then(|()| self.output.flush());
        if let Err(e) = shown {
            log::warn!("Failed to show prompt: {}", e);
            return None;
        }
        self.read_answer()
    }
}

/// Ask for a line on stdout, returning it trimmed. `None` when stdin is
/// closed.
pub(crate) fn prompt(question: &str) -> Option<String> {
    print!("{}", question);
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
