//! reStructuredText building blocks

use std::fmt;

pub const BANNER: &str = "..  THIS FILE IS GENERATED BY `gen_doc.{py|sh}`
    !DO NOT EDIT THIS FILE MANUALLY!

";

/// Section header underlined (and overlined for a title) by `rule`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub name: &'a str,
    pub rule: char,
    pub is_title: bool,
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rule = self.rule.to_string().repeat(self.name.chars().count());
        if self.is_title {
            writeln!(f, "{rule}")?;
        }
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{rule}")?;
        writeln!(f)
    }
}

/// Cross-reference label `api_<prefix>_<name>`, with dots of the prefix turned into underscores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor<'a> {
    pub prefix: &'a str,
    pub name: &'a str,
}

impl fmt::Display for Anchor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, ".. _api_{}_{}:", self.prefix.replace('.', "_"), self.name)?;
        writeln!(f)
    }
}

/// Sphinx autodoc directive for a fully qualified target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    AutoClass(&'a str),
    AutoFunction(&'a str),
}

impl fmt::Display for Directive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Directive::AutoClass(target) => {
                writeln!(f, "..  autoclass:: {target}")?;
                writeln!(f, "    :members:")?;
            }
            Directive::AutoFunction(target) => {
                writeln!(f, "..  autofunction:: {target}")?;
            }
        }
        writeln!(f, "    :noindex:")?;
        writeln!(f)
    }
}
