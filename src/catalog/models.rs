/// Key into the string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringId(&'static str);

impl StringId {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn key(self) -> &'static str {
        self.0
    }
}

/// Key into the image assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(&'static str);

impl ImageId {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn key(self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DogRecord {
    pub name: StringId,
    pub age: u32,
    pub image: ImageId,
    pub hobby: StringId,
}

/// Ordered, read-only list of dogs. Index order is display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dogs: Vec<DogRecord>,
}

impl Catalog {
    pub fn new(dogs: Vec<DogRecord>) -> Self {
        Self { dogs }
    }

    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DogRecord> {
        self.dogs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DogRecord> {
        self.dogs.iter()
    }
}
