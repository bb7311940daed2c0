//! Requests sent through the assembled router: server actions, the OpenAPI document and
//! the route guard.

mod actions;
mod middleware;
