//! Shape data for every icon, authored on the 24x24 outline grid.

use super::{
    IconDefinition, circle, ellipse, line, path, polygon, polyline, rect, rounded_rect,
};

icon_catalog! {
    AlertTriangle => "alert-triangle" [
        path("m21.73 18l-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3M12 9v4m0 4h.01"),
    ];
    ArrowDown => "arrow-down" [path("M12 5v14m7-7l-7 7l-7-7")];
    ArrowUp => "arrow-up" [path("m5 12l7-7l7 7m-7 7V5")];
    Atm => "atm" [
        rounded_rect("3", "4", "18", "10", "2"),
        path("M7 14v6h10v-6M10 17h4"),
        path("M7 8h10"),
    ];
    Atm2 => "atm2" [
        rounded_rect("3", "3", "18", "8", "2"),
        path("M6 11v9h12v-9"),
        path("M10 15h4M9 7h6"),
    ];
    Battery => "battery" [
        rounded_rect("2", "7", "16", "10", "2"),
        line("22", "11", "22", "13"),
    ];
    Bell => "bell" [
        path("M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"),
        path("M10.3 21a1.94 1.94 0 0 0 3.4 0"),
    ];
    Bookmark => "bookmark" [
        path("m19 21l-7-4l-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z"),
    ];
    Calendar => "calendar" [
        rounded_rect("3", "4", "18", "18", "2"),
        path("M16 2v4M8 2v4M3 10h18"),
    ];
    Camera => "camera" [
        path("M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z"),
        circle("12", "13", "3"),
    ];
    Check => "check" [path("M20 6L9 17l-5-5")];
    CheckCircle => "check-circle" [
        circle("12", "12", "10"),
        path("m9 12l2 2l4-4"),
    ];
    ChevronDown => "chevron-down" [path("m6 9l6 6l6-6")];
    ChevronLeft => "chevron-left" [path("m15 18l-6-6l6-6")];
    ChevronRight => "chevron-right" [path("m9 18l6-6l-6-6")];
    ChevronUp => "chevron-up" [path("m18 15l-6-6l-6 6")];
    CircleDollarSign => "circle-dollar-sign" [
        circle("12", "12", "10"),
        path("M16 8h-6a2 2 0 1 0 0 4h4a2 2 0 1 1 0 4H8m4 2V6"),
    ];
    Clock => "clock" [
        circle("12", "12", "10"),
        polyline("12 6 12 12 16 14"),
    ];
    Cloud => "cloud" [path("M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z")];
    Code => "code" [
        polyline("16 18 22 12 16 6"),
        polyline("8 6 2 12 8 18"),
    ];
    Copy => "copy" [
        rounded_rect("8", "8", "14", "14", "2"),
        path("M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"),
    ];
    CreditCard => "credit-card" [
        rounded_rect("2", "5", "20", "14", "2"),
        line("2", "10", "22", "10"),
    ];
    Database => "database" [
        ellipse("12", "5", "9", "3"),
        path("M3 5v14a9 3 0 0 0 18 0V5M3 12a9 3 0 0 0 18 0"),
    ];
    Download => "download" [
        path("M12 15V3m9 12v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
        path("m7 10l5 5l5-5"),
    ];
    Eraser => "eraser" [
        path("M21 21H8a2 2 0 0 1-1.42-.587l-3.994-3.999a2 2 0 0 1 0-2.828l10-10a2 2 0 0 1 2.829 0l5.999 6a2 2 0 0 1 0 2.828L12.834 21m-7.752-9.91l8.828 8.828"),
    ];
    Eye => "eye" [
        path("M2.062 12.348a1 1 0 0 1 0-.696a10.75 10.75 0 0 1 19.876 0a1 1 0 0 1 0 .696a10.75 10.75 0 0 1-19.876 0"),
        circle("12", "12", "3"),
    ];
    File => "file" [
        path("M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"),
        path("M14 2v4a2 2 0 0 0 2 2h4"),
    ];
    FileText => "file-text" [
        path("M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"),
        path("M14 2v4a2 2 0 0 0 2 2h4M10 9H8m8 4H8m8 4H8"),
    ];
    Filter => "filter" [polygon("22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3")];
    Folder => "folder" [
        path("M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"),
    ];
    Globe => "globe" [
        path("M21.54 15H17a2 2 0 0 0-2 2v4.54M7 3.34V5a3 3 0 0 0 3 3a2 2 0 0 1 2 2c0 1.1.9 2 2 2a2 2 0 0 0 2-2c0-1.1.9-2 2-2h3.17M11 21.95V18a2 2 0 0 0-2-2a2 2 0 0 1-2-2v-1a2 2 0 0 0-2-2H2.05"),
        circle("12", "12", "10"),
    ];
    Heart => "heart" [
        path("M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2c-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"),
    ];
    Home => "home" [
        path("M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8"),
        path("M3 10a2 2 0 0 1 .709-1.528l7-6a2 2 0 0 1 2.582 0l7 6A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
    ];
    Info => "info" [
        circle("12", "12", "10"),
        path("M12 16v-4M12 8h.01"),
    ];
    Key => "key" [
        circle("7.5", "15.5", "5.5"),
        path("m21 2l-9.6 9.6M15.5 7.5l3 3L22 7l-3-3"),
    ];
    LayoutGrid => "layout-grid" [
        rounded_rect("3", "3", "7", "7", "1"),
        rounded_rect("14", "3", "7", "7", "1"),
        rounded_rect("14", "14", "7", "7", "1"),
        rounded_rect("3", "14", "7", "7", "1"),
    ];
    Link => "link" [
        path("M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"),
        path("M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"),
    ];
    List => "list" [path("M8 6h13M8 12h13M8 18h13M3 6h.01M3 12h.01M3 18h.01")];
    Loader => "loader" [
        path("M12 2v4m4.2 1.8l2.9-2.9M18 12h4m-5.8 4.2l2.9 2.9M12 18v4m-7.1-2.9l2.9-2.9M2 12h4M4.9 4.9l2.9 2.9"),
    ];
    Lock => "lock" [
        rounded_rect("3", "11", "18", "11", "2"),
        path("M7 11V7a5 5 0 0 1 10 0v4"),
    ];
    LogOut => "log-out" [
        path("m16 17l5-5l-5-5m5 5H9m0 9H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"),
    ];
    Mail => "mail" [
        rounded_rect("2", "4", "20", "16", "2"),
        path("m22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
    ];
    MapPin => "map-pin" [
        path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
        circle("12", "10", "3"),
    ];
    Menu => "menu" [path("M4 5h16M4 12h16M4 19h16")];
    MessagesSquare => "messages-square" [
        path("M16 10a2 2 0 0 1-2 2H6.828a2 2 0 0 0-1.414.586l-2.202 2.202A.71.71 0 0 1 2 14.286V4a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2zm4-1a2 2 0 0 1 2 2v10.286a.71.71 0 0 1-1.212.502l-2.202-2.202A2 2 0 0 0 17.172 19H10a2 2 0 0 1-2-2v-1"),
    ];
    Minus => "minus" [path("M5 12h14")];
    Moon => "moon" [
        path("M20.985 12.486a9 9 0 1 1-9.473-9.472c.405-.022.617.46.402.803a6 6 0 0 0 8.268 8.268c.344-.215.825-.004.803.401"),
    ];
    MoreHorizontal => "more-horizontal" [
        circle("12", "12", "1"),
        circle("19", "12", "1"),
        circle("5", "12", "1"),
    ];
    Package => "package" [
        path("M11 21.73a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73zm1 .27V12"),
        path("M3.29 7L12 12l8.71-5M7.5 4.27l9 5.15"),
    ];
    PanelLeftClose => "panel-left-close" [
        rounded_rect("3", "3", "18", "18", "2"),
        path("M9 3v18m7-6l-3-3l3-3"),
    ];
    Pause => "pause" [
        rect("6", "4", "4", "16"),
        rect("14", "4", "4", "16"),
    ];
    Pencil => "pencil" [
        path("M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5L2 22l1.5-5.5Z"),
        path("m15 5l4 4"),
    ];
    Phone => "phone" [
        path("M22 16.92v3a2 2 0 0 1-2.18 2a19.79 19.79 0 0 1-8.63-3.07a19.5 19.5 0 0 1-6-6a19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72a12.84 12.84 0 0 0 .7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45a12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"),
    ];
    Play => "play" [polygon("6 3 20 12 6 21 6 3")];
    Plus => "plus" [path("M5 12h14m-7-7v14")];
    Printer => "printer" [
        polyline("6 9 6 2 18 2 18 9"),
        path("M6 18H4a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2h-2"),
        rect("6", "14", "12", "8"),
    ];
    RefreshCw => "refresh-cw" [
        path("M3 12a9 9 0 0 1 9-9a9.75 9.75 0 0 1 6.74 2.74L21 8"),
        path("M21 3v5h-5m5 4a9 9 0 0 1-9 9a9.75 9.75 0 0 1-6.74-2.74L3 16"),
        path("M8 16H3v5"),
    ];
    Search => "search" [
        path("m21 21l-4.34-4.34"),
        circle("11", "11", "8"),
    ];
    Send => "send" [
        line("22", "2", "11", "13"),
        polygon("22 2 15 22 11 13 2 9 22 2"),
    ];
    Server => "server" [
        rounded_rect("2", "2", "20", "8", "2"),
        rounded_rect("2", "14", "20", "8", "2"),
        path("M6 6h.01M6 18h.01"),
    ];
    Settings => "settings" [
        path("M9.671 4.136a2.34 2.34 0 0 1 4.659 0a2.34 2.34 0 0 0 3.319 1.915a2.34 2.34 0 0 1 2.33 4.033a2.34 2.34 0 0 0 0 3.831a2.34 2.34 0 0 1-2.33 4.033a2.34 2.34 0 0 0-3.319 1.915a2.34 2.34 0 0 1-4.659 0a2.34 2.34 0 0 0-3.32-1.915a2.34 2.34 0 0 1-2.33-4.033a2.34 2.34 0 0 0 0-3.831A2.34 2.34 0 0 1 6.35 6.051a2.34 2.34 0 0 0 3.319-1.915"),
        circle("12", "12", "3"),
    ];
    Share => "share" [
        circle("18", "5", "3"),
        circle("6", "12", "3"),
        circle("18", "19", "3"),
        line("8.59", "13.51", "15.42", "17.49"),
        line("15.41", "6.51", "8.59", "10.49"),
    ];
    ShoppingBag => "shopping-bag" [
        path("M16 10a4 4 0 0 1-8 0M3.103 6.034h17.794"),
        path("M3.4 5.467a2 2 0 0 0-.4 1.2V20a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6.667a2 2 0 0 0-.4-1.2l-2-2.667A2 2 0 0 0 17 2H7a2 2 0 0 0-1.6.8z"),
    ];
    Square => "square" [rounded_rect("3", "3", "18", "18", "2")];
    Star => "star" [
        polygon("12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"),
    ];
    Sun => "sun" [
        circle("12", "12", "4"),
        path("M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"),
    ];
    Tag => "tag" [
        path("M12.586 2.586A2 2 0 0 0 11.172 2H4a2 2 0 0 0-2 2v7.172a2 2 0 0 0 .586 1.414l8.704 8.704a2.426 2.426 0 0 0 3.42 0l6.58-6.58a2.426 2.426 0 0 0 0-3.42z"),
        circle("7.5", "7.5", ".5"),
    ];
    Terminal => "terminal" [
        polyline("4 17 10 11 4 5"),
        line("12", "19", "20", "19"),
    ];
    ThumbsUp => "thumbs-up" [
        path("M7 10v12M15 5.88L14 10h5.83a2 2 0 0 1 1.92 2.56l-2.33 8A2 2 0 0 1 17.5 22H4a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2h2.76a2 2 0 0 0 1.79-1.11L12 2a3.13 3.13 0 0 1 3 3.88Z"),
    ];
    Trash => "trash" [
        path("M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M3 6h18M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"),
    ];
    Unlock => "unlock" [
        rounded_rect("3", "11", "18", "11", "2"),
        path("M7 11V7a5 5 0 0 1 9.9-1"),
    ];
    Unplug => "unplug" [
        path("m19 5l3-3M2 22l3-3m1.3 1.3a2.4 2.4 0 0 0 3.4 0L12 18l-6-6l-2.3 2.3a2.4 2.4 0 0 0 0 3.4Zm1.2-6.8L10 11m.5 5.5L13 14m-1-8l6 6l2.3-2.3a2.4 2.4 0 0 0 0-3.4l-2.6-2.6a2.4 2.4 0 0 0-3.4 0Z"),
    ];
    Upload => "upload" [
        path("M12 3v12m5-7l-5-5l-5 5m14 7v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
    ];
    User => "user" [
        path("M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"),
        circle("12", "7", "4"),
    ];
    Users => "users" [
        path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M16 3.128a4 4 0 0 1 0 7.744M22 21v-2a4 4 0 0 0-3-3.87"),
        circle("9", "7", "4"),
    ];
    Video => "video" [
        path("m16 13l5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5"),
        rounded_rect("2", "6", "14", "12", "2"),
    ];
    Volume => "volume" [
        path("M11 4.702a.705.705 0 0 0-1.203-.498L6.413 7.587A1.4 1.4 0 0 1 5.416 8H3a1 1 0 0 0-1 1v6a1 1 0 0 0 1 1h2.416a1.4 1.4 0 0 1 .997.413l3.383 3.384A.705.705 0 0 0 11 19.298zM16 9a5 5 0 0 1 0 6M19.364 18.364a9 9 0 0 0 0-12.728"),
    ];
    Wifi => "wifi" [
        path("M12 20h.01M2 8.82a15 15 0 0 1 20 0M5 12.859a10 10 0 0 1 14 0M8.5 16.429a5 5 0 0 1 7 0"),
    ];
    X => "x" [path("M18 6L6 18M6 6l12 12")];
    Zoom => "zoom" [
        circle("10", "10", "7"),
        path("m21 21l-6-6"),
    ];
    ZoomIn => "zoom-in" [
        circle("10", "10", "7"),
        path("m21 21l-6-6M7 10h6m-3-3v6"),
    ];
    ZoomOut => "zoom-out" [
        circle("10", "10", "7"),
        path("m21 21l-6-6M7 10h6"),
    ];
}
