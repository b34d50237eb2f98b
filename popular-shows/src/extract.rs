use std::path::Path;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::Config;
use crate::error::{GenerateError, Result};

/// How show titles are found in a search results page: a title cell marks an
/// entry, and the entry's name is the text of the first link after the cell
/// whose href matches the link pattern.
#[derive(Debug)]
pub struct TitleRules {
    cell: Selector,
    link: Regex,
    strict: bool,
}

impl TitleRules {
    pub fn new(cell_selector: &str, link_pattern: &str, strict: bool) -> Result<TitleRules> {
        let cell = Selector::parse(cell_selector).map_err(|e| GenerateError::InvalidSelector {
            selector: cell_selector.to_string(),
            message: format!("{:?}", e),
        })?;
        let link = Regex::new(link_pattern).map_err(|source| GenerateError::InvalidLinkPattern {
            pattern: link_pattern.to_string(),
            source,
        })?;
        Ok(TitleRules { cell, link, strict })
    }

    pub fn from_config(config: &Config) -> Result<TitleRules> {
        TitleRules::new(&config.cell_selector, &config.link_pattern, config.strict)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn is_title_cell(&self, element: &ElementRef) -> bool {
        self.cell.matches(element)
    }

    fn is_title_link(&self, element: &ElementRef) -> bool {
        element
            .value()
            .attr("href")
            .map_or(false, |href| self.link.is_match(href))
    }
}

/// Result of scanning one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTitles {
    /// One entry per resolved cell, in document order
    pub titles: Vec<String>,
    /// Number of title cells on the page
    pub cells: usize,
}

impl PageTitles {
    /// 1-based index of the first cell that has no title link after it.
    /// Resolved cells always form a prefix: once a cell finds no link,
    /// no later cell can either.
    pub fn first_missing_cell(&self) -> Option<usize> {
        if self.titles.len() < self.cells {
            Some(self.titles.len() + 1)
        } else {
            None
        }
    }
}

/// Walk the page once in document order. A cell waits for the next title
/// link that starts after the cell's own start tag, which includes links
/// nested inside the cell. Several waiting cells all take the same link.
pub fn scan_page(html: &str, rules: &TitleRules) -> PageTitles {
    let document = Html::parse_document(html);

    let mut titles = Vec::new();
    let mut cells = 0;
    let mut waiting = 0;

    for node in document.tree.root().descendants() {
        let element = match ElementRef::wrap(node) {
            Some(element) => element,
            None => continue,
        };

        // check the link first so a cell never resolves to itself
        if waiting > 0 && rules.is_title_link(&element) {
            let title: String = element.text().collect();
            for _ in 0..waiting {
                titles.push(title.clone());
            }
            waiting = 0;
        }

        if rules.is_title_cell(&element) {
            cells += 1;
            waiting += 1;
        }
    }

    PageTitles { titles, cells }
}

/// Extract the show titles of one page. `path` only labels errors and logs.
pub fn extract_titles(html: &str, path: &Path, rules: &TitleRules) -> Result<Vec<String>> {
    let page = scan_page(html, rules);

    if let Some(cell) = page.first_missing_cell() {
        if rules.is_strict() {
            return Err(GenerateError::TitleLinkNotFound {
                path: path.to_path_buf(),
                cell,
            });
        }
        log::warn!(
            "{}: skipping {} title cell(s) from cell {} on, no title link follows them",
            path.display(),
            page.cells - page.titles.len(),
            cell
        );
    }

    Ok(page.titles)
}
