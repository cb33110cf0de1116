//! Toolkit-independent description of the screen.
//!
//! Every function here is pure: given a record, its row state and a string
//! resolver it returns plain data. The egui shell paints these structs and
//! turns button clicks back into [`crate::app::events::AppEvent`]s.

use crate::app::state::ExpansionState;
use crate::catalog::{DogRecord, ImageId, StringId};
use crate::infra::resources::{
    StringResolver, ABOUT, APP_NAME, EXPAND_BUTTON_DESCRIPTION, WOOF_LOGO_DESCRIPTION, YEARS_OLD,
};

pub const WOOF_LOGO: ImageId = ImageId::new("woof_logo");
/// Same glyph in both states.
pub const EXPAND_GLYPH: char = '⏷';
const ICON_SIZE: f32 = 64.0;
const ICON_PADDING: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub logo: ThumbnailView,
    pub logo_description: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub index: usize,
    pub thumbnail: ThumbnailView,
    pub information: InformationView,
    pub toggle: ToggleView,
    pub about: Option<AboutView>,
}

/// Decorative image: outer `size` box with `padding` on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailView {
    pub image: ImageId,
    pub size: f32,
    pub padding: f32,
}

impl ThumbnailView {
    pub fn inner_size(&self) -> f32 {
        (self.size - 2.0 * self.padding).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InformationView {
    pub name: String,
    pub age_line: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleView {
    pub glyph: char,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutView {
    pub label: String,
    pub description: String,
}

pub fn woof_top_app_bar(strings: &dyn StringResolver) -> HeaderView {
    HeaderView {
        logo: dog_icon(WOOF_LOGO),
        logo_description: strings.resolve_string(WOOF_LOGO_DESCRIPTION, &[]),
        title: strings.resolve_string(APP_NAME, &[]),
    }
}

pub fn dog_item(
    index: usize,
    dog: &DogRecord,
    state: ExpansionState,
    strings: &dyn StringResolver,
) -> RowView {
    RowView {
        index,
        thumbnail: dog_icon(dog.image),
        information: dog_information(dog.name, dog.age, strings),
        toggle: ToggleView {
            glyph: EXPAND_GLYPH,
            description: strings.resolve_string(EXPAND_BUTTON_DESCRIPTION, &[]),
        },
        about: dog_about(dog.hobby, state, strings),
    }
}

pub fn dog_information(name: StringId, age: u32, strings: &dyn StringResolver) -> InformationView {
    InformationView {
        name: strings.resolve_string(name, &[]),
        age_line: strings.resolve_string(YEARS_OLD, &[&age]),
    }
}

pub fn dog_icon(image: ImageId) -> ThumbnailView {
    ThumbnailView {
        image,
        size: ICON_SIZE,
        padding: ICON_PADDING,
    }
}

pub fn dog_about(
    hobby: StringId,
    state: ExpansionState,
    strings: &dyn StringResolver,
) -> Option<AboutView> {
    state.is_expanded().then(|| AboutView {
        label: strings.resolve_string(ABOUT, &[]),
        description: strings.resolve_string(hobby, &[]),
    })
}
