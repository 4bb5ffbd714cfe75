mod readings;
mod users;
