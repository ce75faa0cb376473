pub mod notifications_rest_controller;
