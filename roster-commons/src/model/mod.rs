use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

mod error;
pub use error::*;

/// A single entry of the contact list, as served by the static resource
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub imagen: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mapmarker: String,
    #[serde(default)]
    pub earphone: String,
    #[serde(default)]
    pub comments: String,
}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::cmp::PartialEq<Contact> for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.imagen == other.imagen
            && self.name == other.name
            && self.mapmarker == other.mapmarker
            && self.earphone == other.earphone
            && self.comments == other.comments
    }
}

impl Eq for Contact {}

/// Values bound to the input fields of the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub mapmaker: String,
    pub phone: String,
    pub email: String,
}

impl ContactInput {
    pub fn clear(&mut self) {
        self.name.clear();
        self.mapmaker.clear();
        self.phone.clear();
        self.email.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    /// path segment of the portrait service
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Men
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transient state of the contact form: inputs, gender selection and portrait index
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub input: ContactInput,
    pub gender: Gender,
    pub img: u32,
    default_img: u32,
}

impl ContactForm {
    pub fn new(default_img: u32) -> Self {
        ContactForm {
            input: ContactInput::default(),
            gender: Gender::default(),
            img: default_img,
            default_img,
        }
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.gender = Gender::default();
        self.img = self.default_img;
    }
}

/// Decode the static contacts document, a plain JSON array
pub fn decode_contacts(raw: &str) -> Result<Vec<Contact>, SerialisationError> {
    serde_json::from_str(raw).map_err(|e| SerialisationError::Decoding {
        message: "failed to decode contact list".to_string(),
        cause: e,
    })
}

#[cfg(test)]
mod model_tests {
    use super::*;

    const DOCUMENT: &str = r#"[
        {"id": 0, "imagen": "http://api.randomuser.me/portraits/women/12.jpg", "name": "Ana",
         "mapmarker": "Santo Domingo", "earphone": "809-555-0101", "comments": "ana@example.com"},
        {"id": 1, "imagen": "http://api.randomuser.me/portraits/men/33.jpg", "name": "Luis",
         "mapmarker": "Santiago", "earphone": "809-555-0102", "comments": "luis@example.com"}
    ]"#;

    #[test]
    fn decode_static_document() {
        let contacts = decode_contacts(DOCUMENT).unwrap();

        assert_eq!(2, contacts.len());
        assert_eq!(0, contacts[0].id);
        assert_eq!("Ana", contacts[0].name);
        assert_eq!("Santiago", contacts[1].mapmarker);
        assert_eq!("809-555-0102", contacts[1].earphone);
        assert_eq!("luis@example.com", contacts[1].comments);
    }

    #[test]
    fn decode_missing_fields_as_empty() {
        let contacts = decode_contacts(r#"[{"id": 7, "name": "Sin datos"}]"#).unwrap();

        assert_eq!(7, contacts[0].id);
        assert_eq!("", contacts[0].imagen);
        assert_eq!("", contacts[0].comments);
    }

    #[test]
    fn decode_negative_and_missing_ids() {
        let contacts =
            decode_contacts(r#"[{"id": 0, "name": "a"}, {"id": -1, "name": "b"}, {"name": "c"}]"#)
                .unwrap();

        let ids: Vec<i64> = contacts.iter().map(|c| c.id).collect();
        assert_eq!(vec![0, -1, 0], ids);
        assert_eq!("b", contacts[1].name);
    }

    #[test]
    fn decode_rejects_non_array() {
        let result = decode_contacts(r#"{"id": 0}"#);
        assert!(matches!(result, Err(SerialisationError::Decoding { .. })));

        let result = decode_contacts("not json");
        assert!(result.is_err());
    }

    #[test]
    fn encoded_contacts_use_wire_names() {
        let contact = Contact {
            id: 3,
            imagen: "img".to_string(),
            name: "n".to_string(),
            mapmarker: "m".to_string(),
            earphone: "e".to_string(),
            comments: "c".to_string(),
        };

        let encoded = serde_json::to_string(&[contact.clone()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(3, value[0]["id"]);
        assert_eq!("m", value[0]["mapmarker"]);
        assert_eq!("e", value[0]["earphone"]);
        assert_eq!(vec![contact], decode_contacts(&encoded).unwrap());
    }

    #[test]
    fn form_reset_restores_defaults() {
        let mut form = ContactForm::new(50);
        form.input.name = "Pedro".to_string();
        form.input.mapmaker = "La Vega".to_string();
        form.input.phone = "1234".to_string();
        form.input.email = "pedro@example.com".to_string();
        form.gender = Gender::Women;
        form.img = 12;

        form.reset();

        assert_eq!(ContactForm::new(50), form);
        assert_eq!(Gender::Men, form.gender);
    }

    #[test]
    fn gender_path_segments() {
        assert_eq!("men", Gender::Men.as_str());
        assert_eq!("women", Gender::Women.to_string());
        assert_eq!(Gender::Men, Gender::default());
    }
}
