pub const LOADING_SPINNER: &str = "w-16 h-16 border-4 border-purple-500 border-t-transparent rounded-full animate-spin";
pub const HEADER_TITLE: &str = "text-4xl sm:text-5xl md:text-6xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-purple-600 to-pink-600 mb-4";
pub const HEADER_DIVIDER: &str = "w-32 h-1 bg-gradient-to-r from-purple-500 to-pink-500 mx-auto rounded-full mb-5";
pub const TAGLINE: &str = "text-base sm:text-lg text-gray-700 max-w-lg mx-auto text-center";
pub const COUNTER_TEXT: &str = "text-purple-700 font-medium";
pub const GIFT_GRID: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4 sm:gap-6 md:gap-8";
pub const PRIMARY_BUTTON: &str = "bg-gradient-to-r from-purple-500 to-pink-500 text-white px-6 py-2 rounded-full font-medium shadow-md hover:shadow-lg transition-all duration-200";
pub const PAGE_LINK: &str = "text-purple-600 hover:text-purple-800 font-medium underline underline-offset-4";
pub const FOOTNOTE: &str = "text-gray-500 text-sm";
