pub mod u601_bulk_csv_import;
