use crate::layout::Field;
use crate::symbol::Symbol;

/// Symbols staged for one packed word, keyed by field position.
///
/// A fixed-size slot per [`Field`]; building a word never allocates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSet {
    slots: [Option<Symbol>; Field::COUNT],
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `symbol` at `field`, replacing whatever was there.
    pub fn put(&mut self, field: Field, symbol: Symbol) {
        self.slots[field.index()] = Some(symbol);
    }

    pub fn get(&self, field: Field) -> Option<Symbol> {
        self.slots[field.index()]
    }

    /// Occupied slots in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Symbol)> + '_ {
        Field::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(field, slot)| slot.map(|symbol| (field, symbol)))
    }

    /// The stored symbols in field order, gaps omitted.
    pub fn values(&self) -> Vec<Symbol> {
        self.slots.iter().flatten().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        self.slots = [None; Field::COUNT];
    }
}

impl FromIterator<(Field, Symbol)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (Field, Symbol)>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for (field, symbol) in iter {
            set.put(field, symbol);
        }
        set
    }
}
