mod campaign;
mod moderation;
mod request;
mod role;
mod suggestion;
mod tag;
