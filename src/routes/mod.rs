use actix_web::web;

use crate::response::{json_error_handler, path_error_handler};

pub mod cors;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;

/// Every route served by the app, as listed on the sitemap.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/user"),
    ("GET", "/users"),
    ("POST", "/create/user"),
    ("GET", "/users/favorites/{user_id}"),
    ("GET", "/people"),
    ("GET", "/people/{people_id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{planet_id}"),
    ("POST", "/favorite/planet/{planet_id}"),
    ("POST", "/favorite/people/{people_id}"),
    ("DELETE", "/favorite/planet/{fav_id}"),
    ("DELETE", "/favorite/people/{fav_id}"),
];

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .configure(sitemap::config)
        .configure(user::config)
        .configure(people::config)
        .configure(planet::config)
        .configure(favorite::config);
}

#[cfg(test)]
mod tests {
    use actix_web::{http::Method, test, web, App};
    use serde_json::json;

    use super::{configure, ENDPOINTS};
    use crate::repository::{CharacterRepository, PlanetRepository, UserRepository};
    use crate::test_util::{new_character, new_planet, new_user, setup_db};

    /// `/people/{people_id}` -> `/people/1`
    fn with_ids(path: &str) -> String {
        path.split('/')
            .map(|seg| if seg.starts_with('{') { "1" } else { seg })
            .collect::<Vec<_>>()
            .join("/")
    }

    #[actix_web::test]
    async fn every_listed_endpoint_is_served() {
        let db = setup_db().await;
        UserRepository::new(&db).create(new_user("Leia", "leia@rebel.org")).await.unwrap();
        PlanetRepository::new(&db).create(new_planet("Alderaan")).await.unwrap();
        CharacterRepository::new(&db).create(new_character("Luke")).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .configure(configure),
        )
        .await;

        // POST favorites run before the DELETEs, so association 1 exists by then
        for (method, path) in ENDPOINTS {
            let uri = with_ids(path);
            let mut req = test::TestRequest::default()
                .method(Method::from_bytes(method.as_bytes()).unwrap())
                .uri(&uri);
            if *method == "POST" {
                req = if uri == "/create/user" {
                    req.set_json(json!({"name": "Han", "email": "han@falcon.net", "password": "x"}))
                } else {
                    req.set_json(json!({"id_user": 1}))
                };
            }

            let resp = test::call_service(&app, req.to_request()).await;
            assert!(
                resp.status().is_success(),
                "{} {} answered {}",
                method,
                uri,
                resp.status()
            );
        }
    }
}
