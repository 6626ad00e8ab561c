pub mod class_schedule;
