mod campaign;
mod infraction;
mod request;
mod role;
mod suggestion;
mod tag;
