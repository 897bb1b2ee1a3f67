use aerodesk_core::SeatMapBuilder;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub admin_role: String,
}

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthConfig,
    pub seat_maps: SeatMapBuilder,
}
