use crate::data::booking::BookingRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod pagination;
mod soft_delete;
mod update_stay;
