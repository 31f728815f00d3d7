use crate::components::icons::IconKind;

pub const COMPANY_NAME_TH: &str = "บริษัท เอจิส แม็พ จำกัด";
pub const COMPANY_NAME_EN: &str = "AGIS MAP CO., LTD.";
pub const BRAND: &str = "AGIS MAP";
pub const CONTACT_EMAIL: &str = "contact@agismap.co.th";

pub const SERVICES_ANCHOR: &str = "services";
pub const CONTACT_ANCHOR: &str = "contact";

pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: IconKind,
}

pub struct Service {
    pub icon: IconKind,
    pub title: &'static str,
    pub th: &'static str,
    pub en: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        title: "วางแผนอย่างมั่นใจด้วยระบบที่ทันสมัย",
        subtitle: "GIS • แผนที่ภาษี • สำรวจภาคสนาม",
        icon: IconKind::MapPin,
    },
    Slide {
        title: "Drone Survey ระดับมืออาชีพ",
        subtitle: "ทำแผนที่ • ประเมินพื้นที่ • วางผัง",
        icon: IconKind::Drone,
    },
    Slide {
        title: "Digital, e‑Service & Analytics",
        subtitle: "ระบบสารสนเทศ • ระบบจัดเก็บรายได้ • รายงานสถิติ",
        icon: IconKind::Database,
    },
];

/// Slide for a hero slide index. Out of range indices show the last slide.
pub fn slide(index: usize) -> &'static Slide {
    &SLIDES[index.min(SLIDES.len() - 1)]
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: IconKind::MapPin,
        title: "ระบบสารสนเทศภูมิศาสตร์ (GIS) & แผนที่ภาษี",
        th: "รับจัดทำระบบสารสนเทศภูมิศาสตร์ แผนที่ภาษี และงานสำรวจภาคสนาม เพื่อสนับสนุนการบริหารจัดการทรัพย์สินและทรัพยากรของหน่วยงานราชการ องค์กรปกครองส่วนท้องถิ่น และภาคเอกชน",
        en: "GIS platforms, cadastral/tax maps, and field surveys for asset/resource management across government and private sectors.",
    },
    Service {
        icon: IconKind::Drone,
        title: "Drone Survey",
        th: "สำรวจและจัดทำข้อมูลด้วยอากาศยานไร้คนขับ (Drone Survey) เพื่อการทำแผนที่ ประเมินพื้นที่ การวางผัง และการบริหารจัดการทรัพย์สินของหน่วยงานและธุรกิจเอกชน",
        en: "Professional UAV mapping for planning, area assessment, and asset management.",
    },
    Service {
        icon: IconKind::Database,
        title: "ดิจิทัลแพลตฟอร์ม & e‑Service",
        th: "พัฒนาระบบดิจิทัลและงานคอมพิวเตอร์ เช่น เอกสารอิเล็กทรอนิกส์ โปรแกรมประยุกต์ ระบบ e‑Service และเครื่องมืออัตโนมัติสำหรับการจัดการข้อมูล",
        en: "Digital systems: e‑documents, applications, e‑Services, and automation tools for data operations.",
    },
    Service {
        icon: IconKind::BarChart,
        title: "ซอฟต์แวร์สำเร็จรูปเพื่อองค์กร",
        th: "พัฒนาซอฟต์แวร์สำเร็จรูป เช่น โปรแกรมจัดเก็บค่าน้ำประปา ค่าขยะมูลฝอย ระบบจัดเก็บรายได้ และงานบริการสาธารณะ/เชิงพาณิชย์อื่น ๆ",
        en: "Ready‑made enterprise apps: utilities billing, revenue collection, and public service suites.",
    },
    Service {
        icon: IconKind::MessageSquareMore,
        title: "ดิจิทัลคอมมูนิเคชัน & LINE OA",
        th: "พัฒนาและให้บริการระบบสื่อสารดิจิทัล เช่น LINE Official Account (LINE OA) แพลตฟอร์มออนไลน์ และระบบแจ้งเตือนอัตโนมัติ เพื่อสนับสนุนงานบริการประชาชน/องค์กร/ธุรกิจ",
        en: "Digital communications: LINE OA, online platforms, and automated notifications for citizen and business services.",
    },
    Service {
        icon: IconKind::BarChart,
        title: "ข้อมูล • วิเคราะห์ • สถิติ",
        th: "ด้านนวัตกรรมข้อมูลและซอฟต์แวร์ เพื่อการวิเคราะห์ ประเมินค่า และออกรายงานเชิงสถิติ รองรับทั้งงานท้องถิ่น งานสาธารณะ และภาคเอกชน",
        en: "Data innovation & analytics: valuation, dashboards, and statistical reporting.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{slide_index, AnimationFrame};
    use pretty_assertions::assert_eq;

    #[test]
    fn every_slide_index_has_a_slide() {
        for step in 0..=100 {
            let progress = step as f64 / 100.0;
            let index = AnimationFrame::at(progress).slide_index;
            assert!(index < SLIDES.len(), "progress {}", progress);
        }
    }

    #[test]
    fn slides_follow_hero_progress() {
        assert_eq!(slide(slide_index(0.1)).icon, IconKind::MapPin);
        assert_eq!(slide(slide_index(0.5)).icon, IconKind::Drone);
        assert_eq!(slide(slide_index(0.9)).icon, IconKind::Database);
    }

    #[test]
    fn out_of_range_slide_shows_last() {
        assert_eq!(slide(7).title, SLIDES[2].title);
    }
}
