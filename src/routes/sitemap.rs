use actix_web::{http::header::ContentType, web, HttpResponse};

use super::ENDPOINTS;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(sitemap)));
}

async fn sitemap() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render(ENDPOINTS))
}

fn render(endpoints: &[(&str, &str)]) -> String {
    let items: String = endpoints
        .iter()
        .map(|(method, path)| {
            // only parameterless GETs are clickable
            if *method == "GET" && !path.contains('{') {
                format!("<li>{} <a href=\"{}\">{}</a></li>", method, path, path)
            } else {
                format!("<li>{} {}</li>", method, path)
            }
        })
        .collect();
    format!(
        "<!doctype html><html><head><title>Star Wars API</title></head>\
         <body><h1>Star Wars API</h1><ul>{}</ul></body></html>",
        items
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as web_test, App};

    #[test]
    fn links_only_plain_get_routes() {
        let html = render(&[("GET", "/people"), ("GET", "/people/{people_id}"), ("POST", "/create/user")]);
        assert!(html.contains("<li>GET <a href=\"/people\">/people</a></li>"));
        assert!(html.contains("<li>GET /people/{people_id}</li>"));
        assert!(html.contains("<li>POST /create/user</li>"));
    }

    #[actix_web::test]
    async fn serves_html_index() {
        let app = web_test::init_service(App::new().configure(config)).await;
        let req = web_test::TestRequest::get().uri("/").to_request();
        let resp = web_test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let body = web_test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("/favorite/planet/{planet_id}"));
    }
}
