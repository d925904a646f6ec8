use crate::types::{AccountKind, AccountSnapshot, DatedRecord, RecordKind};

/// list item that can be filtered by id or kind
pub trait Filterable {
    type Kind: PartialEq + Copy;

    fn item_id(&self) -> u64;
    fn item_kind(&self) -> Self::Kind;
}

impl Filterable for AccountSnapshot {
    type Kind = AccountKind;

    fn item_id(&self) -> u64 {
        self.id
    }

    fn item_kind(&self) -> AccountKind {
        self.kind
    }
}

impl Filterable for DatedRecord {
    type Kind = RecordKind;

    fn item_id(&self) -> u64 {
        self.id
    }

    fn item_kind(&self) -> RecordKind {
        self.kind
    }
}

/// list filters used by pickers and history views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter<K> {
    All,
    ByKind(K),
    /// everything except one item, e.g. the source account of a transfer
    ExcludeId(u64),
}

pub fn apply<'a, T: Filterable>(items: &'a [T], filter: &ListFilter<T::Kind>) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| match filter {
            ListFilter::All => true,
            ListFilter::ByKind(kind) => item.item_kind() == *kind,
            ListFilter::ExcludeId(id) => item.item_id() != *id,
        })
        .collect()
}
