use actix_web::web;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::JwtManager;
use crate::repositories::{
    SqliteActivityLogRepository, SqliteClientRepository, SqliteDashboardRepository,
    SqliteFlightRepository, SqlitePassengerRepository, SqlitePlaneRepository,
    SqliteReservationRepository, SqliteRoleRepository, SqliteRouteRepository,
    SqliteSystemUserRepository,
};
use crate::services::{
    ActivityLogService, AuthService, ClientService, DashboardService, FlightService,
    PassengerService, PlaneService, ReservationService, RoleService, RouteService,
    SystemUserService,
};

/// Every service the handlers need, wired to one pool.
#[derive(Clone)]
pub struct AppServices {
    pub activity_log: web::Data<ActivityLogService>,
    pub auth: web::Data<AuthService>,
    pub clients: web::Data<ClientService>,
    pub dashboard: web::Data<DashboardService>,
    pub flights: web::Data<FlightService>,
    pub passengers: web::Data<PassengerService>,
    pub planes: web::Data<PlaneService>,
    pub reservations: web::Data<ReservationService>,
    pub roles: web::Data<RoleService>,
    pub routes: web::Data<RouteService>,
    pub system_users: web::Data<SystemUserService>,
    pub jwt_manager: web::Data<JwtManager>,
}

impl AppServices {
    pub fn new(pool: SqlitePool, jwt_manager: JwtManager) -> Self {
        // Initialize repositories
        let activity_log_repository = Arc::new(SqliteActivityLogRepository::new(pool.clone()));
        let client_repository = Arc::new(SqliteClientRepository::new(pool.clone()));
        let dashboard_repository = Arc::new(SqliteDashboardRepository::new(pool.clone()));
        let flight_repository = Arc::new(SqliteFlightRepository::new(pool.clone()));
        let passenger_repository = Arc::new(SqlitePassengerRepository::new(pool.clone()));
        let plane_repository = Arc::new(SqlitePlaneRepository::new(pool.clone()));
        let reservation_repository = Arc::new(SqliteReservationRepository::new(pool.clone()));
        let role_repository = Arc::new(SqliteRoleRepository::new(pool.clone()));
        let route_repository = Arc::new(SqliteRouteRepository::new(pool.clone()));
        let system_user_repository = Arc::new(SqliteSystemUserRepository::new(pool));

        // Initialize services with dependency injection
        let activity_log = Arc::new(ActivityLogService::new(
            activity_log_repository,
            system_user_repository.clone(),
        ));

        Self {
            activity_log: web::Data::from(activity_log.clone()),
            auth: web::Data::new(AuthService::new(system_user_repository.clone())),
            clients: web::Data::new(ClientService::new(
                client_repository.clone(),
                activity_log.clone(),
            )),
            dashboard: web::Data::new(DashboardService::new(dashboard_repository)),
            flights: web::Data::new(FlightService::new(
                flight_repository.clone(),
                route_repository.clone(),
                plane_repository.clone(),
                activity_log.clone(),
            )),
            passengers: web::Data::new(PassengerService::new(
                passenger_repository,
                reservation_repository.clone(),
                activity_log.clone(),
            )),
            planes: web::Data::new(PlaneService::new(plane_repository, activity_log.clone())),
            reservations: web::Data::new(ReservationService::new(
                reservation_repository,
                client_repository,
                flight_repository,
                activity_log.clone(),
            )),
            roles: web::Data::new(RoleService::new(
                role_repository.clone(),
                activity_log.clone(),
            )),
            routes: web::Data::new(RouteService::new(route_repository, activity_log.clone())),
            system_users: web::Data::new(SystemUserService::new(
                system_user_repository,
                role_repository,
                activity_log,
            )),
            jwt_manager: web::Data::new(jwt_manager),
        }
    }

    /// Registers the services as app data and mounts the API routes.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.activity_log.clone())
            .app_data(self.auth.clone())
            .app_data(self.clients.clone())
            .app_data(self.dashboard.clone())
            .app_data(self.flights.clone())
            .app_data(self.passengers.clone())
            .app_data(self.planes.clone())
            .app_data(self.reservations.clone())
            .app_data(self.roles.clone())
            .app_data(self.routes.clone())
            .app_data(self.system_users.clone())
            .app_data(self.jwt_manager.clone());

        crate::handlers::configure_routes(cfg);
    }
}
