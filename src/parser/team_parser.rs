// Team list extraction from the event page
use crate::model::ParserError;
use scraper::{Html, Selector};

pub trait Parser {
    fn parse(&self, html: &str) -> Result<Vec<String>, ParserError>;
}

pub struct TeamListParser {
    selector: Selector,
}

impl TeamListParser {
    pub fn new(selector: &str) -> Result<Self, ParserError> {
        let selector =
            Selector::parse(selector).map_err(|_| ParserError::Selector(selector.to_string()))?;
        Ok(Self { selector })
    }
}

impl Parser for TeamListParser {
    /// Collects the text of every matched cell, one team per non-blank line.
    fn parse(&self, html: &str) -> Result<Vec<String>, ParserError> {
        let document = Html::parse_document(html);

        let teams = document
            .select(&self.selector)
            .flat_map(|cell| {
                let text = cell.text().collect::<String>();
                text.split('\n')
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(teams)
    }
}
