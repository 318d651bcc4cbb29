//! Payload records ("code elements") carried by data division nodes.
//!
//! Records are plain values, built by whatever reads the source text and
//! immutable once handed to a node. Nothing here is validated: a picture
//! string or a level number is stored as given.

use core::fmt;

/// Name given to a definition entry that was never named.
pub const UNNAMED: &str = "?";

/// Level given to a definition entry that was never leveled.
pub const DEFAULT_LEVEL: u16 = 1;

/// `DATA DIVISION.`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DataDivisionHeader;

impl fmt::Display for DataDivisionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DataDivisionHeader")
    }
}

/// `WORKING-STORAGE SECTION.`, `LOCAL-STORAGE SECTION.` or `LINKAGE SECTION.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSectionHeader {
    WorkingStorage,
    LocalStorage,
    Linkage,
}

impl DataSectionHeader {
    pub fn name(self) -> &'static str {
        match self {
            DataSectionHeader::WorkingStorage => "WorkingStorageSectionHeader",
            DataSectionHeader::LocalStorage => "LocalStorageSectionHeader",
            DataSectionHeader::Linkage => "LinkageSectionHeader",
        }
    }
}

impl fmt::Display for DataSectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields shared by every level-numbered entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataDefinitionEntry<'a> {
    pub name: &'a str,
    pub level: u16,
}

impl<'a> DataDefinitionEntry<'a> {
    pub fn new(name: &'a str, level: u16) -> Self {
        Self { name, level }
    }

    /// Returns `self`; lets every entry kind be read as a definition.
    pub fn definition(&self) -> &Self {
        self
    }
}

impl Default for DataDefinitionEntry<'_> {
    fn default() -> Self {
        Self {
            name: UNNAMED,
            level: DEFAULT_LEVEL,
        }
    }
}

impl fmt::Display for DataDefinitionEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {}", self.level, self.name)
    }
}

/// A data description entry, with an optional `PICTURE` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DataDescriptionEntry<'a> {
    pub definition: DataDefinitionEntry<'a>,
    pub picture: Option<&'a str>,
}

impl<'a> DataDescriptionEntry<'a> {
    pub fn new(name: &'a str, level: u16) -> Self {
        Self {
            definition: DataDefinitionEntry::new(name, level),
            picture: None,
        }
    }

    pub fn with_picture(mut self, picture: &'a str) -> Self {
        self.picture = Some(picture);
        self
    }

    pub fn definition(&self) -> &DataDefinitionEntry<'a> {
        &self.definition
    }
}

/// A level-88 condition name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DataConditionEntry<'a> {
    pub definition: DataDefinitionEntry<'a>,
}

impl<'a> DataConditionEntry<'a> {
    pub fn new(name: &'a str, level: u16) -> Self {
        Self {
            definition: DataDefinitionEntry::new(name, level),
        }
    }

    pub fn definition(&self) -> &DataDefinitionEntry<'a> {
        &self.definition
    }
}

/// A `TYPEDEF` entry, with the number of fields it declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeDefinitionEntry<'a> {
    pub definition: DataDefinitionEntry<'a>,
    pub size: u32,
}

impl<'a> TypeDefinitionEntry<'a> {
    pub fn new(name: &'a str, level: u16, size: u32) -> Self {
        Self {
            definition: DataDefinitionEntry::new(name, level),
            size,
        }
    }

    pub fn definition(&self) -> &DataDefinitionEntry<'a> {
        &self.definition
    }
}

macro_rules! display_definition {
    ($($entry:ident),*) => {
        $(
            impl fmt::Display for $entry<'_> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.definition, f)
                }
            }
        )*
    };
}

display_definition!(DataDescriptionEntry, DataConditionEntry, TypeDefinitionEntry);

/// Borrowed payload of a node: one of the records above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeElement<'a> {
    DataDivisionHeader(&'a DataDivisionHeader),
    DataSectionHeader(&'a DataSectionHeader),
    DataDescriptionEntry(&'a DataDescriptionEntry<'a>),
    DataConditionEntry(&'a DataConditionEntry<'a>),
    TypeDefinitionEntry(&'a TypeDefinitionEntry<'a>),
}

impl<'a> CodeElement<'a> {
    pub fn division(self) -> Option<&'a DataDivisionHeader> {
        match self {
            CodeElement::DataDivisionHeader(header) => Some(header),
            _ => None,
        }
    }

    pub fn section(self) -> Option<&'a DataSectionHeader> {
        match self {
            CodeElement::DataSectionHeader(header) => Some(header),
            _ => None,
        }
    }

    pub fn description(self) -> Option<&'a DataDescriptionEntry<'a>> {
        match self {
            CodeElement::DataDescriptionEntry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn condition(self) -> Option<&'a DataConditionEntry<'a>> {
        match self {
            CodeElement::DataConditionEntry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn type_definition(self) -> Option<&'a TypeDefinitionEntry<'a>> {
        match self {
            CodeElement::TypeDefinitionEntry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Name and level, for the three definition entry kinds.
    pub fn definition(self) -> Option<&'a DataDefinitionEntry<'a>> {
        match self {
            CodeElement::DataDescriptionEntry(entry) => Some(entry.definition()),
            CodeElement::DataConditionEntry(entry) => Some(entry.definition()),
            CodeElement::TypeDefinitionEntry(entry) => Some(entry.definition()),
            CodeElement::DataDivisionHeader(_) | CodeElement::DataSectionHeader(_) => None,
        }
    }
}

impl fmt::Display for CodeElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeElement::DataDivisionHeader(header) => fmt::Display::fmt(header, f),
            CodeElement::DataSectionHeader(header) => fmt::Display::fmt(header, f),
            CodeElement::DataDescriptionEntry(entry) => fmt::Display::fmt(entry, f),
            CodeElement::DataConditionEntry(entry) => fmt::Display::fmt(entry, f),
            CodeElement::TypeDefinitionEntry(entry) => fmt::Display::fmt(entry, f),
        }
    }
}
