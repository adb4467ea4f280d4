//! Route sets and token/chain matrices
//!
//! Fees, commit thresholds and bonders are all keyed by token and then by
//! chain. The cells an enabled token must fill are derived from the declared
//! routes, parameterised by [`MatrixShape`] and [`RouteFilter`].

use serde_json::Value;

/// Declared source -> destination routes, in configuration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Routes {
    pairs: Vec<(String, String)>,
}

impl Routes {
    /// Collect routes from a `routes` section. Non-object entries contribute nothing.
    pub fn from_value(value: Option<&Value>) -> Self {
        let mut pairs = Vec::new();
        if let Some(sources) = value.and_then(Value::as_object) {
            for (source, destinations) in sources {
                if let Some(destinations) = destinations.as_object() {
                    for destination in destinations.keys() {
                        pairs.push((source.clone(), destination.clone()));
                    }
                }
            }
        }
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(s, d)| (s.as_str(), d.as_str()))
    }

    /// Distinct destination chains, in first-seen order
    pub fn destinations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for (_, destination) in self.pairs() {
            if !seen.contains(&destination) {
                seen.push(destination);
            }
        }
        seen
    }
}

/// Which routes a matrix must cover
#[derive(Debug, Clone, Copy)]
pub enum RouteFilter<'a> {
    All,
    /// Routes sourced from this chain are exempt
    ExemptSource(&'a str),
}

impl RouteFilter<'_> {
    fn admits(&self, source: &str) -> bool {
        match self {
            RouteFilter::All => true,
            RouteFilter::ExemptSource(exempt) => source != *exempt,
        }
    }
}

/// How a matrix is keyed below the token level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixShape {
    /// `matrix[token][destination]`
    ByDestination,
    /// `matrix[token][source][destination]`
    ByRoute,
}

/// A single required matrix entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<'a> {
    pub token: &'a str,
    pub source: Option<&'a str>,
    pub destination: &'a str,
}

impl<'a> Cell<'a> {
    pub fn lookup<'v>(&self, matrix: &'v Value) -> Option<&'v Value> {
        let by_token = matrix.get(self.token)?;
        let by_source = match self.source {
            Some(source) => by_token.get(source)?,
            None => by_token,
        };
        by_source.get(self.destination)
    }

    pub fn path(&self, section: &str) -> String {
        match self.source {
            Some(source) => format!("{}.{}.{}.{}", section, self.token, source, self.destination),
            None => format!("{}.{}.{}", section, self.token, self.destination),
        }
    }
}

/// Every cell an enabled token set must fill, token-major
pub fn required_cells<'a>(
    tokens: &'a [String],
    routes: &'a Routes,
    shape: MatrixShape,
    filter: RouteFilter<'_>,
) -> Vec<Cell<'a>> {
    let mut cells = Vec::new();
    for token in tokens {
        match shape {
            MatrixShape::ByDestination => {
                for destination in routes.destinations() {
                    cells.push(Cell { token: token.as_str(), source: None, destination });
                }
            }
            MatrixShape::ByRoute => {
                for (source, destination) in routes.pairs() {
                    if filter.admits(source) {
                        cells.push(Cell { token: token.as_str(), source: Some(source), destination });
                    }
                }
            }
        }
    }
    cells
}

/// Every `matrix[token][source][destination]` entry present for the given tokens
pub fn present_cells<'v>(matrix: &'v Value, tokens: &'v [String]) -> Vec<(Cell<'v>, &'v Value)> {
    let mut cells = Vec::new();
    for token in tokens {
        let Some(sources) = matrix.get(token.as_str()).and_then(Value::as_object) else {
            continue;
        };
        for (source, destinations) in sources {
            let Some(destinations) = destinations.as_object() else {
                continue;
            };
            for (destination, value) in destinations {
                let cell = Cell {
                    token: token.as_str(),
                    source: Some(source.as_str()),
                    destination: destination.as_str(),
                };
                cells.push((cell, value));
            }
        }
    }
    cells
}

/// An absent matrix, `null` or `{}` carries no requirements
pub fn is_empty_matrix(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}
