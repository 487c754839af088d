use std::collections::HashSet;
use std::mem;

use crate::model::Contact;

/// Ordered contact list owning the counter new contacts take their id from
#[derive(Clone, Debug)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    // None once the counter ran past i64::MAX
    next_id: Option<i64>,
}

impl Default for ContactBook {
    fn default() -> Self {
        ContactBook {
            contacts: vec![],
            next_id: Some(0),
        }
    }
}

impl ContactBook {
    pub fn new() -> Self {
        ContactBook::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// id the next appended contact will receive
    pub fn next_id(&self) -> i64 {
        match self.next_id {
            Some(id) => id,
            None => self.lowest_free_id(),
        }
    }

    /// Replace the list with `seed`. Contacts appended before the seed arrived
    /// are kept behind it and renumbered.
    pub fn seed(&mut self, seed: Vec<Contact>) {
        let pending = mem::replace(&mut self.contacts, seed);

        let len = i64::try_from(self.contacts.len()).unwrap_or(i64::MAX);
        self.next_id = match self.contacts.iter().map(|c| c.id).max() {
            Some(max_id) => max_id.checked_add(1).map(|id| id.max(len)),
            None => Some(0),
        };

        for mut contact in pending {
            contact.id = self.take_id();
            self.contacts.push(contact);
        }
    }

    /// Append `contact` under a fresh id, returning the stored record
    pub fn append(&mut self, mut contact: Contact) -> &Contact {
        contact.id = self.take_id();
        self.contacts.push(contact);

        &self.contacts[self.contacts.len() - 1]
    }

    fn take_id(&mut self) -> i64 {
        match self.next_id {
            Some(id) => {
                self.next_id = id.checked_add(1);
                id
            }
            None => self.lowest_free_id(),
        }
    }

    /// smallest non-negative id not taken yet
    fn lowest_free_id(&self) -> i64 {
        let taken: HashSet<i64> = self.contacts.iter().map(|c| c.id).collect();

        // the list holds fewer than i64::MAX contacts, one id is always free
        (0..i64::MAX).find(|id| !taken.contains(id)).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod book_tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::decode_contacts;

    fn contact(id: i64, name: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            ..Contact::default()
        }
    }

    fn assert_unique_ids(book: &ContactBook) {
        let ids: HashSet<i64> = book.contacts().iter().map(|c| c.id).collect();
        assert_eq!(book.len(), ids.len());
    }

    #[test]
    fn seeded_book_equals_seed() {
        let seed = vec![contact(0, "a"), contact(1, "b"), contact(2, "c")];

        let mut book = ContactBook::new();
        book.seed(seed.clone());

        assert_eq!(&seed[..], book.contacts());
        assert_eq!(3, book.next_id());
    }

    #[test]
    fn next_id_equals_length() {
        let mut book = ContactBook::new();
        assert_eq!(0, book.next_id());

        book.seed((0..5).map(|i| contact(i, "x")).collect());
        let added = book.append(contact(99, "new")).id;

        assert_eq!(5, added);
        assert_eq!(6, book.len());
    }

    #[test]
    fn ids_stay_unique_for_sparse_seed() {
        let mut book = ContactBook::new();
        book.seed(vec![contact(40, "a"), contact(3, "b")]);

        assert_eq!(41, book.append(contact(0, "c")).id);
        assert_eq!(42, book.append(contact(0, "d")).id);

        assert_unique_ids(&book);
    }

    #[test]
    fn negative_ids_count_from_length() {
        let mut book = ContactBook::new();
        book.seed(vec![contact(-5, "a"), contact(-2, "b")]);

        assert_eq!(2, book.append(contact(0, "c")).id);
        assert_unique_ids(&book);
    }

    #[test]
    fn seed_at_max_id_does_not_overflow() {
        let mut book = ContactBook::new();
        let seed = decode_contacts(
            r#"[{"id": 9223372036854775807, "name": "a"}, {"id": 0, "name": "b"}]"#,
        )
        .unwrap();
        book.seed(seed);

        assert_eq!(1, book.append(contact(0, "c")).id);
        assert_eq!(2, book.append(contact(0, "d")).id);
        assert_eq!(4, book.len());
        assert_unique_ids(&book);
    }

    #[test]
    fn counter_reaching_max_stays_unique() {
        let mut book = ContactBook::new();
        book.seed(vec![contact(i64::MAX - 1, "a")]);

        assert_eq!(i64::MAX, book.append(contact(0, "b")).id);
        assert_eq!(0, book.append(contact(0, "c")).id);
        assert_eq!(1, book.append(contact(0, "d")).id);
        assert_unique_ids(&book);
    }

    #[test]
    fn ids_keep_growing() {
        let mut book = ContactBook::new();

        let ids: Vec<i64> = (0..4).map(|_| book.append(contact(0, "x")).id).collect();

        assert_eq!(vec![0, 1, 2, 3], ids);
    }

    #[test]
    fn early_additions_survive_seed() {
        let mut book = ContactBook::new();
        book.append(contact(0, "early"));

        book.seed(vec![contact(0, "a"), contact(1, "b")]);

        let names: Vec<&str> = book.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(vec!["a", "b", "early"], names);
        assert_eq!(2, book.contacts()[2].id);
        assert_eq!(3, book.next_id());
    }
}
