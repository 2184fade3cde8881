use crate::data::payment::PaymentRepository;
use chrono::Utc;
use entity::payment::PaymentStatus;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
