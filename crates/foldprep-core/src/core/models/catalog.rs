use std::collections::HashMap;

/// Sequence identifier to raw sequence. Loaded once, read-only for the run.
pub type SequenceCatalog = HashMap<String, String>;

/// Human-facing entity name to canonical catalog key (e.g. a display name to
/// a UniProt accession). May be empty.
pub type AliasMap = HashMap<String, String>;

/// The read-only lookup context threaded through entity resolution.
#[derive(Debug, Clone, Copy)]
pub struct Catalogs<'a> {
    pub proteins: &'a SequenceCatalog,
    pub nucleic_acids: &'a SequenceCatalog,
    pub aliases: &'a AliasMap,
}

/// Looks up `name` in `catalog`, trying the alias-indirected key first and the
/// raw name second.
pub fn lookup_sequence<'a>(
    catalog: &'a SequenceCatalog,
    aliases: &AliasMap,
    name: &str,
) -> Option<&'a str> {
    aliases
        .get(name)
        .and_then(|key| catalog.get(key))
        .or_else(|| catalog.get(name))
        .map(String::as_str)
}
