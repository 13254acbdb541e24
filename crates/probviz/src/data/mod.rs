pub mod keybindings_data;
