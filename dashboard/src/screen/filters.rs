//! city / name filter selection

use museum_shared::MuseumQuery;

/// the currently selected filters; empty means "any"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub city: String,
    pub name: String,
}

impl FilterState {
    /// selecting a city drops the name filter
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
        self.name.clear();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn clear(&mut self) {
        self.city.clear();
        self.name.clear();
    }

    pub fn query(&self) -> MuseumQuery {
        MuseumQuery::new(self.city.clone(), self.name.clone())
    }
}
