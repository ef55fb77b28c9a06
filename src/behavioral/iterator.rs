// Pattern: Iterator
// Traversal lives in its own type, so the collection can offer several
// orders without exposing its storage.

use crate::error::Result;

#[derive(Debug, Default, Clone)]
pub struct WordsCollection {
    collection: Vec<String>,
}

impl WordsCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.collection.push(item.into());
    }

    pub fn iter(&self) -> AlphabeticalOrderIterator<'_> {
        AlphabeticalOrderIterator::new(&self.collection, false)
    }

    pub fn reverse_iter(&self) -> AlphabeticalOrderIterator<'_> {
        AlphabeticalOrderIterator::new(&self.collection, true)
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}

/// Walks a word list front-to-back, or back-to-front when `reverse`.
pub struct AlphabeticalOrderIterator<'a> {
    collection: &'a [String],
    front: usize,
    back: usize,
    reverse: bool,
}

impl<'a> AlphabeticalOrderIterator<'a> {
    fn new(collection: &'a [String], reverse: bool) -> Self {
        Self {
            collection,
            front: 0,
            back: collection.len(),
            reverse,
        }
    }

    fn take_front(&mut self) -> Option<&'a str> {
        if self.front >= self.back {
            return None;
        }
        self.front += 1;
        Some(&self.collection[self.front - 1])
    }

    fn take_back(&mut self) -> Option<&'a str> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(&self.collection[self.back])
    }
}

impl<'a> Iterator for AlphabeticalOrderIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reverse {
            self.take_back()
        } else {
            self.take_front()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a> DoubleEndedIterator for AlphabeticalOrderIterator<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reverse {
            self.take_front()
        } else {
            self.take_back()
        }
    }
}

impl<'a> ExactSizeIterator for AlphabeticalOrderIterator<'a> {}

impl<'a> IntoIterator for &'a WordsCollection {
    type Item = &'a str;
    type IntoIter = AlphabeticalOrderIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn run() -> Result<()> {
    let mut collection = WordsCollection::new();
    collection.add_item("First");
    collection.add_item("Second");
    collection.add_item("Third");

    println!("Straight traversal:");
    for item in &collection {
        println!("{}", item);
    }

    println!("\nReverse traversal:");
    for item in collection.reverse_iter() {
        println!("{}", item);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> WordsCollection {
        let mut collection = WordsCollection::new();
        for word in ["First", "Second", "Third"] {
            collection.add_item(word);
        }
        collection
    }

    #[test]
    fn test_straight_traversal() {
        let collection = words();
        let items: Vec<&str> = collection.iter().collect();
        assert_eq!(items, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_reverse_traversal() {
        let collection = words();
        let items: Vec<&str> = collection.reverse_iter().collect();
        assert_eq!(items, vec!["Third", "Second", "First"]);
    }

    #[test]
    fn test_reverse_of_reverse_is_straight() {
        let collection = words();
        let items: Vec<&str> = collection.reverse_iter().rev().collect();
        assert_eq!(items, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_both_ends_meet() {
        let collection = words();
        let mut iter = collection.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some("First"));
        assert_eq!(iter.next_back(), Some("Third"));
        assert_eq!(iter.next(), Some("Second"));
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_empty_collection() {
        let collection = WordsCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.iter().next(), None);
    }
}
