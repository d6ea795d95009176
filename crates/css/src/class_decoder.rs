//! The full class-to-declaration pipeline.
//!
//! clean → resolve property → extract value → decode value → validate

use crate::alias_table::AliasTable;
use crate::cleaner::{check_token, clean};
use crate::config::DecoderConfig;
use crate::property_name::PropertyNameResolver;
use crate::types::{DecodeReport, Declaration, RejectionReason, TokenOutcome};
use crate::validation::validate_declaration;
use crate::value_decoder::ValueDecoder;
use crate::value_extractor::ValueExtractor;
use anyhow::{Context as _, Result};
use core::fmt;
use css_syntax::{CssGrammarValidator, PropertyValidator};
use log::debug;
use rayon::prelude::*;

/// Turns sets of encoded class tokens into CSS declarations.
///
/// All components are immutable once built, so one decoder may serve many
/// class sets, from many threads.
pub struct ClassDecoder {
    table: AliasTable,
    decoder: ValueDecoder,
    validator: Box<dyn PropertyValidator>,
    parallel: bool,
}

impl fmt::Debug for ClassDecoder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ClassDecoder")
            .field("properties", &self.table.len())
            .field("decoder", &self.decoder)
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}

impl Default for ClassDecoder {
    fn default() -> Self {
        Self::with_parts(
            AliasTable::builtin(),
            ValueDecoder::default(),
            Box::new(CssGrammarValidator),
        )
    }
}

impl ClassDecoder {
    /// Build a decoder from `config`, loading its alias table if one is named.
    ///
    /// # Errors
    /// Returns an error if the unit policy is unusable or the configured alias
    /// table cannot be loaded.
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.check()?;
        let table = match &config.aliases {
            Some(path) => AliasTable::load(path)?,
            None => AliasTable::builtin(),
        };
        debug!(
            "[DECODER] {} properties, units {:?}, parallel {}",
            table.len(),
            config.units,
            config.parallel
        );
        Ok(Self::with_parts(
            table,
            ValueDecoder::new(config.units),
            Box::new(CssGrammarValidator),
        )
        .with_parallel(config.parallel))
    }

    /// Build a sequential decoder from explicit components.
    pub fn with_parts(
        table: AliasTable,
        decoder: ValueDecoder,
        validator: Box<dyn PropertyValidator>,
    ) -> Self {
        Self {
            table,
            decoder,
            validator,
            parallel: false,
        }
    }

    /// Choose whether `decode_classes` spreads tokens over the rayon pool.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub const fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Run a single token through every stage.
    ///
    /// # Errors
    /// Returns an error only on an internal contract violation; rejected
    /// tokens are an `Ok(TokenOutcome::Rejected(..))`.
    pub fn decode_token(&self, token: &str) -> Result<TokenOutcome> {
        let token = token.to_lowercase();
        if let Err(reason) = check_token(&token) {
            return Ok(TokenOutcome::Rejected(reason));
        }
        match PropertyNameResolver::new(&self.table).resolve(&token) {
            Some(property) => self.decode_resolved(&token, property),
            None => Ok(TokenOutcome::Rejected(RejectionReason::NoMatchingProperty)),
        }
    }

    /// Clean, resolve and decode a whole class set.
    ///
    /// # Errors
    /// Returns an error only on an internal contract violation.
    pub fn decode_classes<I, S>(&self, tokens: I) -> Result<DecodeReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.parallel {
            return self.decode_classes_parallel(tokens);
        }
        let (pairs, mut report) = self.resolve_set(tokens);
        for (token, property) in pairs {
            let outcome = self.decode_resolved(&token, &property)?;
            report.record(token, outcome);
        }
        Ok(finish(report))
    }

    /// `decode_classes` with per-token work spread over the rayon pool.
    ///
    /// Each token yields one outcome; outcomes are applied to the report after
    /// the parallel section, so no report state is shared between threads.
    ///
    /// # Errors
    /// Returns an error only on an internal contract violation.
    pub fn decode_classes_parallel<I, S>(&self, tokens: I) -> Result<DecodeReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (pairs, mut report) = self.resolve_set(tokens);
        let outcomes: Vec<(String, TokenOutcome)> = pairs
            .into_par_iter()
            .map(|(token, property)| {
                self.decode_resolved(&token, &property)
                    .map(|outcome| (token, outcome))
            })
            .collect::<Result<_>>()?;
        for (token, outcome) in outcomes {
            report.record(token, outcome);
        }
        Ok(finish(report))
    }

    /// Clean `tokens` and resolve the survivors, collecting every rejection.
    fn resolve_set<I, S>(&self, tokens: I) -> (Vec<(String, String)>, DecodeReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cleaned = clean(tokens);
        let mut resolved = PropertyNameResolver::new(&self.table).resolve_all(&cleaned.cleaned);
        let mut report = DecodeReport::default();
        report.removed.append(&mut cleaned.removed);
        report.removed.append(&mut resolved.removed);
        (resolved.resolved, report)
    }

    fn decode_resolved(&self, token: &str, property: &str) -> Result<TokenOutcome> {
        let encoded = ValueExtractor::new(&self.table)
            .extract(property, token)
            .with_context(|| format!("failed to extract the value of '{token}'"))?;
        let value = self.decoder.decode(property, &encoded.value);
        let outcome =
            match validate_declaration(&*self.validator, property, &value, encoded.priority) {
                Ok(()) => TokenOutcome::Accepted(Declaration {
                    property: property.to_owned(),
                    value,
                    priority: encoded.priority,
                    token: token.to_owned(),
                }),
                Err(reason) => TokenOutcome::Rejected(reason),
            };
        Ok(outcome)
    }
}

fn finish(mut report: DecodeReport) -> DecodeReport {
    report
        .declarations
        .sort_by(|left, right| left.token.cmp(&right.token));
    debug!(
        "[DECODER] {} accepted, {} removed",
        report.declarations.len(),
        report.removed.len()
    );
    report
}
