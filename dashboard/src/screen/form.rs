//! create / edit form state
//!
//! states: hidden, visible (create), visible + readonly (opened from a row).
//! an empty id means the submit creates a museum, a present id updates it.

use museum_shared::{Museum, MuseumDraft, MuseumId};

/// the editable text fields, all required
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    City,
    Zip,
    Address,
    OpeningHours,
    Description,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::City,
        Field::Zip,
        Field::Address,
        Field::OpeningHours,
        Field::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::City => "City",
            Field::Zip => "Zip",
            Field::Address => "Address",
            Field::OpeningHours => "Opening hours",
            Field::Description => "Description",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MuseumForm {
    visible: bool,
    readonly: bool,
    values: MuseumDraft,
}

/// what a valid form asks the backend to do
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(Museum),
    Update(MuseumId, MuseumDraft),
}

impl MuseumForm {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn id(&self) -> Option<MuseumId> {
        self.values.id
    }

    pub fn value(&self, field: Field) -> &str {
        let v = &self.values;
        match field {
            Field::Name => &v.name,
            Field::City => &v.city,
            Field::Zip => &v.zip,
            Field::Address => &v.address,
            Field::OpeningHours => &v.opening_hours,
            Field::Description => &v.description,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let v = &mut self.values;
        let slot = match field {
            Field::Name => &mut v.name,
            Field::City => &mut v.city,
            Field::Zip => &mut v.zip,
            Field::Address => &mut v.address,
            Field::OpeningHours => &mut v.opening_hours,
            Field::Description => &mut v.description,
        };
        *slot = value.into();
    }

    /// show or hide; either way the fields are emptied and editing unlocked
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
        self.readonly = false;
        self.reset();
    }

    /// open the form on an existing record, read-only
    pub fn begin_edit(&mut self, museum: &Museum) {
        if !self.visible {
            self.toggle_visibility();
        }
        self.values = MuseumDraft::from_museum(museum);
        self.readonly = true;
    }

    pub fn enable_editing(&mut self) {
        self.readonly = false;
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|&f| !self.value(f).is_empty())
    }

    /// `None` while a required field is empty
    pub fn submission(&self) -> Option<Submission> {
        if !self.is_valid() {
            return None;
        }
        let draft = self.values.clone();
        Some(match draft.id {
            Some(id) => Submission::Update(id, draft),
            None => Submission::Create(draft.into_new_museum()),
        })
    }

    /// after a submit has completed, whatever the outcome
    pub fn settle(&mut self) {
        self.reset();
        self.readonly = false;
        self.visible = false;
    }

    fn reset(&mut self) {
        self.values = MuseumDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(form: &mut MuseumForm) {
        for (field, value) in Field::ALL.into_iter().zip(["Z", "Y", "1000", "Main 1", "9-5", "d"]) {
            form.set_field(field, value);
        }
    }

    fn stored() -> Museum {
        Museum {
            id: Some(1),
            name: "B".to_string(),
            city: "X".to_string(),
            zip: "2000".to_string(),
            address: "Meir 1".to_string(),
            opening_hours: "10-18".to_string(),
            description: "old".to_string(),
            exhibitions: Vec::new(),
        }
    }

    #[test]
    fn test_toggle_clears_fields_and_readonly() {
        let mut form = MuseumForm::default();
        form.begin_edit(&stored());
        assert!(form.is_visible());
        assert!(form.is_readonly());

        form.toggle_visibility();
        assert!(!form.is_visible());
        assert!(!form.is_readonly());
        assert_eq!(form.id(), None);
        assert_eq!(form.value(Field::Name), "");

        form.toggle_visibility();
        assert!(form.is_visible());
        assert_eq!(form.value(Field::City), "");
    }

    #[test]
    fn test_begin_edit_on_visible_form_keeps_it_open() {
        let mut form = MuseumForm::default();
        form.toggle_visibility();
        form.set_field(Field::Name, "draft");
        form.begin_edit(&stored());
        assert!(form.is_visible());
        assert_eq!(form.id(), Some(1));
        assert_eq!(form.value(Field::Name), "B");
        assert_eq!(form.value(Field::OpeningHours), "10-18");
    }

    #[test]
    fn test_every_field_is_required() {
        for missing in Field::ALL {
            let mut form = MuseumForm::default();
            filled(&mut form);
            form.set_field(missing, "");
            assert!(!form.is_valid(), "{:?} should be required", missing);
            assert_eq!(form.submission(), None);
        }
    }

    #[test]
    fn test_submission_without_id_creates() {
        let mut form = MuseumForm::default();
        filled(&mut form);
        let Some(Submission::Create(museum)) = form.submission() else {
            panic!("expected create");
        };
        assert_eq!(museum.id, None);
        assert_eq!(museum.zip, "1000");
        assert!(museum.exhibitions.is_empty());
    }

    #[test]
    fn test_submission_with_id_updates() {
        let mut form = MuseumForm::default();
        form.begin_edit(&stored());
        form.enable_editing();
        form.set_field(Field::Description, "new");
        let Some(Submission::Update(id, draft)) = form.submission() else {
            panic!("expected update");
        };
        assert_eq!(id, 1);
        assert_eq!(draft.description, "new");
        assert_eq!(draft.id, Some(1));
    }

    #[test]
    fn test_settle_hides_and_resets() {
        let mut form = MuseumForm::default();
        form.begin_edit(&stored());
        form.settle();
        assert_eq!(form, MuseumForm::default());
    }
}
