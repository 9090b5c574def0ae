//! End-to-end lookups through the facade crate

use parlance::prelude::*;
use rstest::rstest;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

#[rstest]
fn test_resource_tree_through_facade() {
	// Arrange
	let dir = TempDir::new().unwrap();
	fs::create_dir_all(dir.path().join("shop")).unwrap();
	fs::write(
		dir.path().join("shop/cart.en.yml"),
		"en:
  items:
    zero: Your cart is empty
    one: 1 item in your cart
    few: A few items (%{count}) in your cart
    many: '%{count} items in your cart'
  owner: Cart of %{name}
",
	)
	.unwrap();
	let mut i18n = I18n::new(Settings::new().with_load_path([dir.path()]));

	// Act
	let empty = i18n.t_with("shop.cart.items", &Args::new().count(0)).unwrap();
	let few = i18n.t_with("shop.cart.items", &Args::new().count(3)).unwrap();
	let many = i18n.t_with("shop.cart.items", &Args::new().count(40)).unwrap();
	let owner = i18n
		.t_with("shop.cart.owner", &Args::new().with("name", "Ada"))
		.unwrap();

	// Assert
	assert_eq!(empty, "Your cart is empty");
	assert_eq!(few, "A few items (3) in your cart");
	assert_eq!(many, "40 items in your cart");
	assert_eq!(owner, "Cart of Ada");
}

#[rstest]
#[serial(i18n)]
fn test_global_context_through_facade() {
	// Arrange
	global::reset();
	global::add("app.title", "Parlance");

	// Act
	let title = global::t("app.title").unwrap();

	// Assert
	assert_eq!(title, "Parlance");
	global::reset();
}
