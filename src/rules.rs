//! Matching rule descriptors.
//!
//! A matching rule is the schema object that decides how two attribute
//! values compare. Each rule fixes a case policy and a value syntax; the
//! preparation pipeline does the rest. The descriptors here cover the
//! standard rules a directory wires to the prepare step; the schema
//! registries that route attribute types to rules live outside this crate
//! and only need [`MatchingRule::find_by_oid`] or
//! [`MatchingRule::find_by_name`] to do so.

use alloc::string::String;

use crate::error::PrepareError;
use crate::prep::{self, AssertionType, CasePolicy};

/// The value syntax a matching rule prepares its operands under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// UTF-8 directory strings with insignificant space handling.
    DirectoryString,
    /// Digit strings where every space is insignificant.
    NumericString,
    /// Printable strings where spaces and hyphens are insignificant.
    TelephoneNumber,
}

/// A matching rule: an OID, its descriptor name, and the preparation it
/// applies to both operands before they are compared byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchingRule {
    /// The rule's object identifier, dotted-decimal.
    pub oid: &'static str,
    /// The rule's descriptor name as it appears in schema definitions.
    pub name: &'static str,
    /// Whether the rule folds case.
    pub case_policy: CasePolicy,
    /// The syntax of the values the rule compares.
    pub syntax: Syntax,
}

impl MatchingRule {
    pub const CASE_IGNORE: Self = Self::new(
        "2.5.13.2",
        "caseIgnoreMatch",
        CasePolicy::CaseInsensitive,
        Syntax::DirectoryString,
    );
    pub const CASE_IGNORE_ORDERING: Self = Self::new(
        "2.5.13.3",
        "caseIgnoreOrderingMatch",
        CasePolicy::CaseInsensitive,
        Syntax::DirectoryString,
    );
    pub const CASE_IGNORE_SUBSTRINGS: Self = Self::new(
        "2.5.13.4",
        "caseIgnoreSubstringsMatch",
        CasePolicy::CaseInsensitive,
        Syntax::DirectoryString,
    );
    pub const CASE_EXACT: Self = Self::new(
        "2.5.13.5",
        "caseExactMatch",
        CasePolicy::CaseSensitive,
        Syntax::DirectoryString,
    );
    pub const CASE_EXACT_ORDERING: Self = Self::new(
        "2.5.13.6",
        "caseExactOrderingMatch",
        CasePolicy::CaseSensitive,
        Syntax::DirectoryString,
    );
    pub const CASE_EXACT_SUBSTRINGS: Self = Self::new(
        "2.5.13.7",
        "caseExactSubstringsMatch",
        CasePolicy::CaseSensitive,
        Syntax::DirectoryString,
    );
    pub const NUMERIC_STRING: Self = Self::new(
        "2.5.13.8",
        "numericStringMatch",
        CasePolicy::CaseSensitive,
        Syntax::NumericString,
    );
    pub const NUMERIC_STRING_SUBSTRINGS: Self = Self::new(
        "2.5.13.10",
        "numericStringSubstringsMatch",
        CasePolicy::CaseSensitive,
        Syntax::NumericString,
    );
    pub const TELEPHONE_NUMBER: Self = Self::new(
        "2.5.13.20",
        "telephoneNumberMatch",
        CasePolicy::CaseSensitive,
        Syntax::TelephoneNumber,
    );
    pub const TELEPHONE_NUMBER_SUBSTRINGS: Self = Self::new(
        "2.5.13.21",
        "telephoneNumberSubstringsMatch",
        CasePolicy::CaseSensitive,
        Syntax::TelephoneNumber,
    );

    /// Every rule declared above.
    pub const ALL: &'static [Self] = &[
        Self::CASE_IGNORE,
        Self::CASE_IGNORE_ORDERING,
        Self::CASE_IGNORE_SUBSTRINGS,
        Self::CASE_EXACT,
        Self::CASE_EXACT_ORDERING,
        Self::CASE_EXACT_SUBSTRINGS,
        Self::NUMERIC_STRING,
        Self::NUMERIC_STRING_SUBSTRINGS,
        Self::TELEPHONE_NUMBER,
        Self::TELEPHONE_NUMBER_SUBSTRINGS,
    ];

    const fn new(
        oid: &'static str,
        name: &'static str,
        case_policy: CasePolicy,
        syntax: Syntax,
    ) -> Self {
        Self {
            oid,
            name,
            case_policy,
            syntax,
        }
    }

    /// Looks a rule up by object identifier.
    pub fn find_by_oid(oid: &str) -> Option<&'static Self> {
        Self::ALL.iter().find(|rule| rule.oid == oid)
    }

    /// Looks a rule up by descriptor name. Descriptor names are
    /// case-insensitive in schema definitions.
    pub fn find_by_name(name: &str) -> Option<&'static Self> {
        Self::ALL
            .iter()
            .find(|rule| rule.name.eq_ignore_ascii_case(name))
    }

    /// Prepares one operand under this rule.
    ///
    /// # Errors
    ///
    /// Propagates [`PrepareError`] from the pipeline unchanged.
    pub fn prepare(
        &self,
        value: &[u8],
        assertion_type: AssertionType,
    ) -> Result<String, PrepareError> {
        match self.syntax {
            Syntax::DirectoryString => prep::prepare(value, assertion_type, self.case_policy),
            Syntax::NumericString => prep::prepare_numeric(value, self.case_policy),
            Syntax::TelephoneNumber => prep::prepare_telephone(value, self.case_policy),
        }
    }

    /// Whether two values match under this rule: prepared forms are
    /// compared byte for byte, nothing else.
    ///
    /// # Errors
    ///
    /// Propagates [`PrepareError`] from either operand.
    pub fn matches(&self, stored: &[u8], asserted: &[u8]) -> Result<bool, PrepareError> {
        let stored = self.prepare(stored, AssertionType::AttributeValue)?;
        let asserted = self.prepare(asserted, AssertionType::AttributeValue)?;
        Ok(stored == asserted)
    }
}
