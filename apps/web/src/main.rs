fn main() {
    if let Err(error) = security_dashboard_web::start() {
        web_sys::console::error_1(&error);
    }
}
