mod order;
mod product;
mod tracking;
