use super::models::{Catalog, DogRecord, ImageId, StringId};

const fn dog(name: &'static str, age: u32, image: &'static str, hobby: &'static str) -> DogRecord {
    DogRecord {
        name: StringId::new(name),
        age,
        image: ImageId::new(image),
        hobby: StringId::new(hobby),
    }
}

const DOGS: [DogRecord; 9] = [
    dog("dog_name_1", 2, "koda", "dog_description_1"),
    dog("dog_name_2", 16, "lola", "dog_description_2"),
    dog("dog_name_3", 2, "frankie", "dog_description_3"),
    dog("dog_name_4", 8, "nox", "dog_description_4"),
    dog("dog_name_5", 8, "faye", "dog_description_5"),
    dog("dog_name_6", 14, "bella", "dog_description_6"),
    dog("dog_name_7", 2, "moana", "dog_description_7"),
    dog("dog_name_8", 7, "tzeitel", "dog_description_8"),
    dog("dog_name_9", 4, "leroy", "dog_description_9"),
];

impl Catalog {
    /// The built-in dogs shown by the app.
    pub fn dogs() -> Self {
        Self::new(DOGS.to_vec())
    }
}
