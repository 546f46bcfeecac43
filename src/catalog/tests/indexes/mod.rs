mod build;
mod group_by_foreign_key;
mod index_by_id;
