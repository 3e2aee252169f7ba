use crate::{
    error::AppError,
    middleware::auth::Caller,
    service::booking::BookingService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod book;
mod update;

fn caller(id: i32) -> Caller {
    Caller {
        id,
        is_admin: false,
    }
}

fn admin(id: i32) -> Caller {
    Caller { id, is_admin: true }
}
