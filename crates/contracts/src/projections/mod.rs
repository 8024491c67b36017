pub mod p001_product_catalog;
