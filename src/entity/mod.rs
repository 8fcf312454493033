pub mod character;
pub mod fav_character;
pub mod fav_planet;
pub mod planet;
pub mod user;

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{character, fav_planet, planet, user};

    #[test]
    fn user_password_never_serialized() {
        let model = user::Model {
            id: 1,
            name: "Leia".to_string(),
            email: "leia@rebel.org".to_string(),
            password: "$2b$10$hash".to_string(),
            is_active: true,
        };
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "Leia", "email": "leia@rebel.org", "is_active": true})
        );

        let back: user::Model = serde_json::from_value(value).unwrap();
        assert_eq!(back.name, model.name);
        assert_eq!(back.email, model.email);
        assert!(back.password.is_empty());
    }

    #[test]
    fn catalog_entities_round_trip_field_for_field() {
        let raw = json!({
            "climate": "murky", "id": 4, "full_name": "Dagobah", "populations": "unknown",
            "rotation_period": "23", "orbital_period": "341", "diameter": "8900",
            "gravity": "N/A", "terrain": "swamp, jungles", "surface_water": "8"
        });
        let planet: planet::Model = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(planet.terrain, "swamp, jungles");
        assert_eq!(serde_json::to_value(&planet).unwrap(), raw);

        let raw = json!({
            "id": 2, "full_name": "Yoda", "birth_year": "896BBY", "species": "Yoda's species",
            "height": "66", "mass": "17", "gender": "male", "hair_color": "white",
            "skin_color": "green", "homeworld": "unknown"
        });
        let character: character::Model = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&character).unwrap(), raw);
    }

    #[test]
    fn association_has_no_back_references() {
        let fav = fav_planet::Model { id: 3, user_id: 1, planet_id: 4 };
        let value: Value = serde_json::to_value(&fav).unwrap();
        assert_eq!(value, json!({"id": 3, "user_id": 1, "planet_id": 4}));
    }
}
