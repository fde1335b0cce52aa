//! Line-based interactive repository selector.
//!
//! Shows one page of the (optionally filtered) list at a time. Each input
//! line is one command:
//!
//! | input         | effect                                   |
//! |---------------|------------------------------------------|
//! | `3`           | open the third repository on the page    |
//! | empty line    | next page (wraps around)                 |
//! | `/text`       | search for `text`; a bare `/` clears it  |
//! | other text    | search for that text                     |
//! | `q` or EOF    | cancel                                   |

mod error;

pub use error::SelectError;

use crate::repository::Repository;
use crate::templates::TemplateRenderer;
use std::io::{BufRead, Write};
use tracing::debug;

/// Number of repositories shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Returns true if `name` matches a search `input`.
///
/// Matching is case-insensitive, ignores spaces and looks for a substring.
#[must_use]
pub fn matches_search(name: &str, input: &str) -> bool {
    normalize(name).contains(&normalize(input))
}

fn normalize(text: &str) -> String {
    text.to_lowercase().replace(' ', "")
}

/// Interactive picker over a repository list.
pub struct Selector<'a> {
    repositories: &'a [Repository],
    renderer: &'a TemplateRenderer,
    page_size: usize,
}

impl<'a> Selector<'a> {
    /// Creates a selector with the default page size.
    #[must_use]
    pub fn new(repositories: &'a [Repository], renderer: &'a TemplateRenderer) -> Self {
        Self {
            repositories,
            renderer,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets how many repositories are shown per page (at least one).
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Runs the selector until a repository is chosen or input ends.
    ///
    /// Returns the chosen index into the original list, or `None` when the
    /// user cancels.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError`] on I/O or template failures.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<Option<usize>, SelectError> {
        if self.repositories.is_empty() {
            return Ok(None);
        }

        let mut filter = String::new();
        let mut page = 0;

        loop {
            let matching = self.matching(&filter);
            let pages = matching.len().div_ceil(self.page_size).max(1);
            page %= pages;

            let shown: Vec<usize> = matching
                .iter()
                .copied()
                .skip(page * self.page_size)
                .take(self.page_size)
                .collect();

            self.draw(&mut output, &filter, &shown, page, pages)?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("Selector input closed");
                return Ok(None);
            }

            match line.trim() {
                "" => page += 1,
                "q" => return Ok(None),
                command => {
                    if let Ok(number) = command.parse::<usize>() {
                        match number.checked_sub(1).and_then(|i| shown.get(i)) {
                            Some(&index) => {
                                let repository = &self.repositories[index];
                                writeln!(output, "{}", self.renderer.render_selected(repository)?)?;
                                return Ok(Some(index));
                            }
                            None => writeln!(output, "No repository {number} on this page.")?,
                        }
                    } else {
                        filter = command.strip_prefix('/').unwrap_or(command).to_string();
                        page = 0;
                        debug!(filter = %filter, "Search updated");
                    }
                }
            }
        }
    }

    /// Indices of repositories matching the current search.
    fn matching(&self, filter: &str) -> Vec<usize> {
        self.repositories
            .iter()
            .enumerate()
            .filter(|(_, repository)| matches_search(&repository.name, filter))
            .map(|(index, _)| index)
            .collect()
    }

    fn draw<W: Write>(
        &self,
        output: &mut W,
        filter: &str,
        shown: &[usize],
        page: usize,
        pages: usize,
    ) -> Result<(), SelectError> {
        writeln!(output, "{}", self.renderer.render_label()?)?;
        if !filter.is_empty() {
            writeln!(output, "Search: {filter}")?;
        }

        if shown.is_empty() {
            writeln!(output, "No matching repositories.")?;
        }

        for (position, &index) in shown.iter().enumerate() {
            let repository = &self.repositories[index];
            let line = if position == 0 {
                self.renderer.render_active(repository)?
            } else {
                self.renderer.render_inactive(repository)?
            };
            writeln!(output, "{:>2}) {line}", position + 1)?;
        }

        if let Some(&active) = shown.first() {
            write!(
                output,
                "{}",
                self.renderer.render_details(&self.repositories[active])?
            )?;
        }

        write!(
            output,
            "[page {}/{}] number opens, text searches, enter pages, q quits: ",
            page + 1,
            pages
        )?;
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn repositories(names: &[&str]) -> Vec<Repository> {
        names
            .iter()
            .map(|name| Repository {
                name: (*name).to_string(),
                href: format!("https://github.com/{name}"),
                ..Default::default()
            })
            .collect()
    }

    fn run(repos: &[Repository], page_size: usize, input: &str) -> (Option<usize>, String) {
        let renderer = TemplateRenderer::new().unwrap();
        let mut output = Vec::new();
        let chosen = Selector::new(repos, &renderer)
            .with_page_size(page_size)
            .run(Cursor::new(input), &mut output)
            .unwrap();
        (chosen, String::from_utf8(output).unwrap())
    }

    #[test]
    fn search_ignores_case_and_spaces() {
        assert!(matches_search("rust-lang/Rust", "RUST LANG"));
        assert!(matches_search("octocat/Hello-World", "hello-w"));
        assert!(matches_search("a/b", ""));
        assert!(!matches_search("a/b", "c"));
    }

    #[test]
    fn number_selects_visible_item() {
        let repos = repositories(&["a/one", "b/two", "c/three"]);
        let (chosen, output) = run(&repos, 4, "2\n");

        assert_eq!(chosen, Some(1));
        assert!(output.contains("\u{1F336}  b/two"));
    }

    #[test]
    fn enter_pages_forward_and_wraps() {
        let repos = repositories(&["a/one", "b/two", "c/three"]);

        let (chosen, _) = run(&repos, 2, "\n1\n");
        assert_eq!(chosen, Some(2));

        let (chosen, _) = run(&repos, 2, "\n\n1\n");
        assert_eq!(chosen, Some(0));
    }

    #[test]
    fn search_narrows_list_and_maps_back_to_original_index() {
        let repos = repositories(&["a/one", "b/two", "c/three", "d/twenty"]);
        let (chosen, output) = run(&repos, 4, "tw\n2\n");

        assert_eq!(chosen, Some(3));
        assert!(output.contains("Search: tw"));
    }

    #[test]
    fn slash_clears_search() {
        let repos = repositories(&["a/one", "b/two"]);
        let (chosen, _) = run(&repos, 4, "two\n/\n1\n");
        assert_eq!(chosen, Some(0));
    }

    #[test]
    fn slash_allows_numeric_search() {
        let repos = repositories(&["a/one", "game/2048"]);
        let (chosen, _) = run(&repos, 4, "/2048\n1\n");
        assert_eq!(chosen, Some(1));
    }

    #[test]
    fn quit_and_eof_cancel() {
        let repos = repositories(&["a/one"]);
        assert_eq!(run(&repos, 4, "q\n").0, None);
        assert_eq!(run(&repos, 4, "").0, None);
    }

    #[test]
    fn out_of_range_number_is_reported() {
        let repos = repositories(&["a/one"]);
        let (chosen, output) = run(&repos, 4, "5\nq\n");

        assert_eq!(chosen, None);
        assert!(output.contains("No repository 5 on this page."));
    }

    #[test]
    fn no_matches_are_reported() {
        let repos = repositories(&["a/one"]);
        let (_, output) = run(&repos, 4, "zzz\nq\n");
        assert!(output.contains("No matching repositories."));
    }

    #[test]
    fn active_item_shows_details() {
        let repos = repositories(&["a/one", "b/two"]);
        let (_, output) = run(&repos, 4, "q\n");

        assert!(output.contains("\u{1F449} a/one"));
        assert!(output.contains("     b/two"));
        assert!(output.contains("Repository Details"));
    }

    #[test]
    fn empty_list_returns_immediately() {
        let (chosen, output) = run(&[], 4, "1\n");
        assert_eq!(chosen, None);
        assert!(output.is_empty());
    }
}
