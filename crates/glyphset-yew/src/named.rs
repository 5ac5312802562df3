//! One thin component per catalog entry.

use glyphset_core::IconName;
use yew::prelude::*;

use crate::context::use_icon_theme;
use crate::icon::{GlyphProps, icon_view};

macro_rules! named_icons {
    ($($component:ident($func:ident) => $name:ident),+ $(,)?) => {
        /// Catalog entry bound to each named component, in declaration order.
        pub const NAMED_ICONS: &[IconName] = &[$(IconName::$name),+];

        $(
            #[doc = concat!("Renders the [`IconName::", stringify!($name), "`] icon.")]
            #[function_component($component)]
            pub fn $func(props: &GlyphProps) -> Html {
                let theme = use_icon_theme();
                icon_view(IconName::$name, &props.render_options(), &theme)
            }
        )+
    };
}

named_icons! {
    IconAlertTriangle(icon_alert_triangle) => AlertTriangle,
    IconArrowDown(icon_arrow_down) => ArrowDown,
    IconArrowUp(icon_arrow_up) => ArrowUp,
    IconAtm(icon_atm) => Atm,
    IconAtm2(icon_atm2) => Atm2,
    IconBattery(icon_battery) => Battery,
    IconBell(icon_bell) => Bell,
    IconBookmark(icon_bookmark) => Bookmark,
    IconCalendar(icon_calendar) => Calendar,
    IconCamera(icon_camera) => Camera,
    IconCheck(icon_check) => Check,
    IconCheckCircle(icon_check_circle) => CheckCircle,
    IconChevronDown(icon_chevron_down) => ChevronDown,
    IconChevronLeft(icon_chevron_left) => ChevronLeft,
    IconChevronRight(icon_chevron_right) => ChevronRight,
    IconChevronUp(icon_chevron_up) => ChevronUp,
    IconCircleDollarSign(icon_circle_dollar_sign) => CircleDollarSign,
    IconClock(icon_clock) => Clock,
    IconCloud(icon_cloud) => Cloud,
    IconCode(icon_code) => Code,
    IconCopy(icon_copy) => Copy,
    IconCreditCard(icon_credit_card) => CreditCard,
    IconDatabase(icon_database) => Database,
    IconDownload(icon_download) => Download,
    IconEraser(icon_eraser) => Eraser,
    IconEye(icon_eye) => Eye,
    IconFile(icon_file) => File,
    IconFileText(icon_file_text) => FileText,
    IconFilter(icon_filter) => Filter,
    IconFolder(icon_folder) => Folder,
    IconGlobe(icon_globe) => Globe,
    IconHeart(icon_heart) => Heart,
    IconHome(icon_home) => Home,
    IconInfo(icon_info) => Info,
    IconKey(icon_key) => Key,
    IconLayoutGrid(icon_layout_grid) => LayoutGrid,
    IconLink(icon_link) => Link,
    IconList(icon_list) => List,
    IconLoader(icon_loader) => Loader,
    IconLock(icon_lock) => Lock,
    IconLogOut(icon_log_out) => LogOut,
    IconMail(icon_mail) => Mail,
    IconMapPin(icon_map_pin) => MapPin,
    IconMenu(icon_menu) => Menu,
    IconMessagesSquare(icon_messages_square) => MessagesSquare,
    IconMinus(icon_minus) => Minus,
    IconMoon(icon_moon) => Moon,
    IconMoreHorizontal(icon_more_horizontal) => MoreHorizontal,
    IconPackage(icon_package) => Package,
    IconPanelLeftClose(icon_panel_left_close) => PanelLeftClose,
    IconPause(icon_pause) => Pause,
    IconPencil(icon_pencil) => Pencil,
    IconPhone(icon_phone) => Phone,
    IconPlay(icon_play) => Play,
    IconPlus(icon_plus) => Plus,
    IconPrinter(icon_printer) => Printer,
    IconRefreshCw(icon_refresh_cw) => RefreshCw,
    IconSearch(icon_search) => Search,
    IconSend(icon_send) => Send,
    IconServer(icon_server) => Server,
    IconSettings(icon_settings) => Settings,
    IconShare(icon_share) => Share,
    IconShoppingBag(icon_shopping_bag) => ShoppingBag,
    IconSquare(icon_square) => Square,
    IconStar(icon_star) => Star,
    IconSun(icon_sun) => Sun,
    IconTag(icon_tag) => Tag,
    IconTerminal(icon_terminal) => Terminal,
    IconThumbsUp(icon_thumbs_up) => ThumbsUp,
    IconTrash(icon_trash) => Trash,
    IconUnlock(icon_unlock) => Unlock,
    IconUnplug(icon_unplug) => Unplug,
    IconUpload(icon_upload) => Upload,
    IconUser(icon_user) => User,
    IconUsers(icon_users) => Users,
    IconVideo(icon_video) => Video,
    IconVolume(icon_volume) => Volume,
    IconWifi(icon_wifi) => Wifi,
    IconX(icon_x) => X,
    IconZoom(icon_zoom) => Zoom,
    IconZoomIn(icon_zoom_in) => ZoomIn,
    IconZoomOut(icon_zoom_out) => ZoomOut,
}
