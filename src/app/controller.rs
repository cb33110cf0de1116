use std::ops::Range;

use crate::app::events::AppEvent;
use crate::app::state::{ExpansionState, RowStates};
use crate::catalog::Catalog;
use crate::infra::resources::StringResolver;
use crate::ui::view::{self, HeaderView, RowView};

pub struct WoofController {
    catalog: Catalog,
    rows: RowStates,
}

impl WoofController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            rows: RowStates::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn expansion(&self, index: usize) -> ExpansionState {
        self.rows.get(index)
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::ToggleRow(index) => {
                if index >= self.catalog.len() {
                    tracing::warn!(index, len = self.catalog.len(), "toggle for unknown row");
                    return;
                }
                let state = self.rows.toggle(index);
                tracing::debug!(index, ?state, "row toggled");
            }
            AppEvent::RowsMaterialized(range) => {
                self.rows.retain(&range);
            }
        }
    }

    pub fn header(&self, strings: &dyn StringResolver) -> HeaderView {
        view::woof_top_app_bar(strings)
    }

    /// Views for the rows in `range`, clamped to the catalog, in catalog order.
    pub fn render_rows(&self, range: Range<usize>, strings: &dyn StringResolver) -> Vec<RowView> {
        let end = range.end.min(self.catalog.len());
        (range.start.min(end)..end)
            .filter_map(|index| {
                let dog = self.catalog.get(index)?;
                Some(view::dog_item(index, dog, self.rows.get(index), strings))
            })
            .collect()
    }
}
