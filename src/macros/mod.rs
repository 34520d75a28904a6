pub mod attributed_enum;
