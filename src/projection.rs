//! Partitioning of cards into board columns.

use crate::domain::{
    board::{PropertyOption, PropertyTemplate},
    card::Card,
};

/// One column of the board.
///
/// `option` is `None` for the "no value" column.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    pub option: Option<&'a PropertyOption>,
    pub cards: Vec<&'a Card>,
}

impl<'a> Group<'a> {
    fn empty(option: Option<&'a PropertyOption>) -> Self {
        Self {
            option,
            cards: Vec::new(),
        }
    }

    pub fn option_id(&self) -> Option<&'a str> {
        self.option.map(|o| o.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Result of grouping a card collection
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    /// Cards with an empty value or one that matches no option
    pub no_value: Group<'a>,
    /// One group per option, in option order
    pub groups: Vec<Group<'a>>,
}

impl<'a> Projection<'a> {
    /// All columns, the "no value" column first
    pub fn columns(&self) -> impl Iterator<Item = &Group<'a>> {
        std::iter::once(&self.no_value).chain(self.groups.iter())
    }

    /// Finds the column for an option id, `None` meaning the "no value" column
    pub fn group(&self, option_id: Option<&str>) -> Option<&Group<'a>> {
        match option_id {
            None => Some(&self.no_value),
            Some(id) => self.groups.iter().find(|g| g.option_id() == Some(id)),
        }
    }
}

/// Groups `cards` by their value for `grouping`.
///
/// Column order follows the option order of the property. Card order inside
/// a column follows the input order. Without a grouping property every card
/// lands in the "no value" column.
pub fn project<'a>(cards: &'a [Card], grouping: Option<&'a PropertyTemplate>) -> Projection<'a> {
    let mut no_value = Group::empty(None);

    let Some(property) = grouping else {
        no_value.cards.extend(cards.iter());
        return Projection {
            no_value,
            groups: Vec::new(),
        };
    };

    let mut groups: Vec<Group<'a>> = property
        .options
        .iter()
        .map(|option| Group::empty(Some(option)))
        .collect();

    for card in cards {
        let slot = card
            .value(&property.id)
            .and_then(|value| property.option_index(value));

        match slot {
            Some(index) => groups[index].cards.push(card),
            None => no_value.cards.push(card),
        }
    }

    Projection { no_value, groups }
}
