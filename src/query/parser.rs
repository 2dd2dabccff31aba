//! Scanner for one filter-expression segment.
//!
//! Two accepted forms:
//!
//! ```text
//! contains(name,'foo')      function form, membership operators
//! age ge '21'               infix form, comparison operators
//! ```
//!
//! The scanner produces a typed [`FilterRule`] directly; there is no
//! intermediate text matching, so malformed input fails with a specific
//! error instead of silently half-matching.

use super::decode_value;
use crate::error::QueryParseError;
use crate::table::{FilterOperator, FilterRule};

pub(super) fn parse_segment(segment: &str) -> Result<FilterRule, QueryParseError> {
    Scanner::new(segment).segment()
}

struct Scanner<'a> {
    segment: &'a str,
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(segment: &'a str) -> Self {
        let segment = segment.trim();
        Self {
            segment,
            rest: segment,
        }
    }

    fn segment(&mut self) -> Result<FilterRule, QueryParseError> {
        let first = self.ident()?;
        self.skip_ws();
        let rule = if self.rest.starts_with('(') {
            self.function_form(first)?
        } else {
            self.infix_form(first)?
        };
        self.skip_ws();
        if !self.rest.is_empty() {
            return Err(self.malformed("unexpected trailing input"));
        }
        Ok(rule)
    }

    /// `op(column,'value')`
    fn function_form(&mut self, op_token: &str) -> Result<FilterRule, QueryParseError> {
        let operator = self.operator(op_token)?;
        if !operator.is_functional() {
            return Err(self.malformed("comparison operators use the infix form"));
        }
        self.expect('(')?;
        self.skip_ws();
        let column = self.ident()?;
        self.skip_ws();
        self.expect(',')?;
        self.skip_ws();
        let value = self.quoted()?;
        self.skip_ws();
        self.expect(')')?;
        Ok(FilterRule::new(column, operator, decode_value(value)))
    }

    /// `column op 'value'`
    fn infix_form(&mut self, column: &str) -> Result<FilterRule, QueryParseError> {
        let op_token = self.ident()?;
        let operator = self.operator(op_token)?;
        if operator.is_functional() {
            return Err(self.malformed("membership operators use the function form"));
        }
        self.skip_ws();
        let value = self.quoted()?;
        Ok(FilterRule::new(column, operator, decode_value(value)))
    }

    fn operator(&self, token: &str) -> Result<FilterOperator, QueryParseError> {
        FilterOperator::from_token(token).ok_or_else(|| QueryParseError::UnknownOperator {
            token: token.to_string(),
            segment: self.segment.to_string(),
        })
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// An identifier: column name or operator token.
    fn ident(&mut self) -> Result<&'a str, QueryParseError> {
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.'))
            .map_or(self.rest.len(), |(at, _)| at);
        if end == 0 {
            return Err(self.malformed("expected an identifier"));
        }
        let (ident, rest) = self.rest.split_at(end);
        self.rest = rest;
        Ok(ident)
    }

    fn expect(&mut self, wanted: char) -> Result<(), QueryParseError> {
        match self.rest.strip_prefix(wanted) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(self.malformed(&format!("expected '{}'", wanted))),
        }
    }

    /// A single-quoted value. Values are percent-encoded on the wire, so a
    /// quote always terminates.
    fn quoted(&mut self) -> Result<&'a str, QueryParseError> {
        let Some(after_open) = self.rest.strip_prefix('\'') else {
            return Err(self.malformed("expected a quoted value"));
        };
        let Some(close) = after_open.find('\'') else {
            return Err(QueryParseError::UnterminatedValue {
                segment: self.segment.to_string(),
            });
        };
        let value = &after_open[..close];
        self.rest = &after_open[close + 1..];
        Ok(value)
    }

    fn malformed(&self, message: &str) -> QueryParseError {
        QueryParseError::MalformedSegment {
            segment: self.segment.to_string(),
            message: message.to_string(),
        }
    }
}
