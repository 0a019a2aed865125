use crate::math::{Point, Real, Vector};
use crate::query::contact_manifolds::{Contact, GeometryTag};
use crate::query::{ContactFlags, ContactOptions};
use alloc::vec::Vec;
use core::ops::Index;

/// The number of contacts a buffer reserves room for on creation.
const INITIAL_RESERVE: usize = 8;

/// The outcome of [`ContactBuffer::emit_contact`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EmitStatus {
    /// The contact was stored as a new entry.
    Appended,
    /// The contact duplicated an existing entry, which kept the largest of both depths.
    Merged,
    /// The buffer was full: the contact was discarded.
    Dropped,
}

/// A list of contacts that never grows past a fixed capacity.
///
/// Contacts can only be added through [`ContactBuffer::emit_contact`], which merges
/// near-duplicate contacts together. Every contact emitted into this buffer is tagged
/// with the buffer's [`GeometryTag`]s.
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactBuffer {
    contacts: Vec<Contact>,
    capacity: usize,
    geom1: GeometryTag,
    geom2: GeometryTag,
}

impl ContactBuffer {
    /// Creates an empty buffer able to hold up to `capacity` contacts.
    ///
    /// `capacity` is only an upper bound: storage grows as contacts are added.
    pub fn new(capacity: usize) -> Self {
        Self::with_tags(capacity, GeometryTag::default(), GeometryTag::default())
    }

    /// Creates an empty buffer whose contacts will carry the given geometry tags.
    pub fn with_tags(capacity: usize, geom1: GeometryTag, geom2: GeometryTag) -> Self {
        Self {
            contacts: Vec::with_capacity(capacity.min(INITIAL_RESERVE)),
            capacity,
            geom1,
            geom2,
        }
    }

    /// The number of contacts stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Does this buffer contain no contact?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The maximum number of contacts this buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Is this buffer unable to hold any new contact?
    #[inline]
    pub fn is_full(&self) -> bool {
        self.contacts.len() >= self.capacity
    }

    /// The number of bytes between two successive contacts of [`Self::contacts`].
    #[inline]
    pub const fn stride() -> usize {
        size_of::<Contact>()
    }

    /// The tags given to the contacts of this buffer.
    #[inline]
    pub fn tags(&self) -> (GeometryTag, GeometryTag) {
        (self.geom1, self.geom2)
    }

    /// The contacts stored, in insertion order.
    #[inline]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// The `i`-th contact, if it exists.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&Contact> {
        self.contacts.get(i)
    }

    /// An iterator through the contacts stored.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// The contact with the largest penetration depth.
    pub fn deepest_contact(&self) -> Option<&Contact> {
        self.contacts
            .iter()
            .max_by(|c1, c2| c1.depth.total_cmp(&c2.depth))
    }

    /// Removes every contact, keeping the capacity and tags.
    #[inline]
    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Adds a contact to this buffer, unless it duplicates an existing one.
    ///
    /// A negative `depth` is clamped to zero. The contact is a duplicate of an
    /// existing one if they are closer than `options.merge_distance_squared` (squared
    /// distance) and their normals are parallel up to `options.merge_normal_tolerance`.
    /// A duplicate is merged into the existing contact, which keeps the largest depth.
    /// The search for duplicates is skipped if `options.flags` contains
    /// [`ContactFlags::CONTACTS_UNIMPORTANT`].
    pub fn emit_contact(
        &mut self,
        position: Point<Real>,
        normal: Vector<Real>,
        depth: Real,
        triangle_index: u32,
        options: &ContactOptions,
    ) -> EmitStatus {
        let contact = Contact::new(
            position,
            normal,
            depth.max(0.0),
            self.geom1,
            self.geom2,
            triangle_index,
        );

        if !options.flags.contains(ContactFlags::CONTACTS_UNIMPORTANT) {
            if let Some(existing) = self.contacts.iter_mut().find(|existing| {
                existing.is_duplicate_of(
                    &contact,
                    options.merge_distance_squared,
                    options.merge_normal_tolerance,
                )
            }) {
                existing.depth = existing.depth.max(contact.depth);
                return EmitStatus::Merged;
            }
        }

        if self.is_full() {
            EmitStatus::Dropped
        } else {
            self.contacts.push(contact);
            EmitStatus::Appended
        }
    }
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
#[serde(rename = "ContactBuffer")]
struct DeserializableContactBuffer {
    contacts: Vec<Contact>,
    capacity: usize,
    geom1: GeometryTag,
    geom2: GeometryTag,
}

#[cfg(feature = "serde-serialize")]
impl<'de> serde::Deserialize<'de> for ContactBuffer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let buffer =
            <DeserializableContactBuffer as serde::Deserialize<'de>>::deserialize(deserializer)?;

        if buffer.contacts.len() > buffer.capacity {
            return Err(D::Error::custom(format_args!(
                "a contact buffer with a capacity of {} cannot hold {} contacts",
                buffer.capacity,
                buffer.contacts.len()
            )));
        }

        Ok(Self {
            contacts: buffer.contacts,
            capacity: buffer.capacity,
            geom1: buffer.geom1,
            geom2: buffer.geom2,
        })
    }
}

impl Index<usize> for ContactBuffer {
    type Output = Contact;

    #[inline]
    fn index(&self, i: usize) -> &Contact {
        &self.contacts[i]
    }
}

impl<'a> IntoIterator for &'a ContactBuffer {
    type Item = &'a Contact;
    type IntoIter = core::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
