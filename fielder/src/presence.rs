use crate::value::FieldValue;

/// Tracks which fields of a record have been explicitly assigned.
///
/// Each declared field owns one slot; a slot holding a value is present, an
/// empty slot is absent. Keeping the value inside the presence marker means
/// the two can never disagree.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PresenceSet {
    slots: Vec<Option<FieldValue>>,
}

impl PresenceSet {
    pub fn with_fields(count: usize) -> Self {
        PresenceSet {
            slots: vec![None; count],
        }
    }

    /// `field` must be a position in the owning schema
    pub fn mark_present(&mut self, field: usize, value: FieldValue) {
        self.slots[field] = Some(value);
    }

    /// Clearing an absent field is a no-op
    pub fn mark_absent(&mut self, field: usize) -> Option<FieldValue> {
        self.slots.get_mut(field).and_then(Option::take)
    }

    pub fn is_present(&self, field: usize) -> bool {
        matches!(self.slots.get(field), Some(Some(_)))
    }

    pub fn get(&self, field: usize) -> Option<&FieldValue> {
        self.slots.get(field).and_then(Option::as_ref)
    }

    /// Positions of the present fields, in declaration order
    pub fn present_fields(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| i))
    }

    pub fn present(&self) -> impl Iterator<Item = (usize, &FieldValue)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (i, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
